use std::fs;
use std::io;

use crate::error::Errors;
use crate::message::Message;

pub fn to_json(messages: &[Message], beautify: bool) -> Result<String, Errors> {
    let result = if beautify {
        serde_json::to_string_pretty(messages)
    } else {
        serde_json::to_string(messages)
    };

    result.map_err(|_| Errors::SerializationError)
}

/// Delivery seam for the exported document.
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, json: &str) -> io::Result<()>;
}

pub struct FileDownload;

impl DownloadSink for FileDownload {
    fn deliver(&mut self, filename: &str, json: &str) -> io::Result<()> {
        fs::write(filename, json)
    }
}

/// Serialize the sequence and hand it to the sink under the configured
/// filename. Fire-and-forget: delivery failures are logged and never
/// propagated, and an empty sequence still exports an empty array.
pub fn download_json(
    sink: &mut impl DownloadSink,
    messages: &[Message],
    filename: &str,
    beautify: bool,
) {
    log::trace!("In download_json");
    log::info!("Downloading...");

    let json = match to_json(messages, beautify) {
        Ok(json) => json,
        Err(_) => {
            log::warn!("Could not serialize messages, skipping download");
            return;
        }
    };

    if let Err(err) = sink.deliver(filename, &json) {
        log::warn!("Could not deliver {}: {}", filename, err);
    }
}
