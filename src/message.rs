use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use crate::feed::FeedElement;

/// One extracted message record. `date` always serializes (as an ISO-8601
/// string or null); the other fields are omitted when absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,
}

impl Message {
    /// Build a record from a message element. The feed omits repeated
    /// metadata for consecutive messages of one sender group, so date,
    /// image and username inherit from the previous record when the
    /// element leaves them out. Text never inherits.
    pub fn from_element(element: &FeedElement, previous: Option<&Message>) -> Self {
        let date = match element.timestamp_attribute() {
            Some(datetime) => parse_datetime(&datetime),
            None => previous.and_then(|message| message.date),
        };

        Message {
            date,
            image: element
                .image_source()
                .or_else(|| previous.and_then(|message| message.image.clone())),
            text: element.text_block(),
            username: element
                .author()
                .or_else(|| previous.and_then(|message| message.username.clone())),
        }
    }
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    dateparser::parse(value).ok()
}
