use crate::classify::{classify, ElementKind};
use crate::clock::Clock;
use crate::constants;
use crate::feed::Feed;
use crate::message::Message;
use crate::scroll::Viewport;

/// The scroll-and-extract state machine. Owns the record accumulator for
/// the duration of one run and yields it at the terminal state; nothing
/// is shared ambiently between runs.
pub struct Extraction<'a> {
    feed: &'a Feed,
    cursor: Option<usize>,
    messages: Vec<Message>,
    progress_interval: usize,
    progress: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<'a> Extraction<'a> {
    /// Positions the cursor at the first message-classified child,
    /// skipping any leading clutter. A feed without messages starts at
    /// the terminal state and harvests an empty sequence.
    pub fn from_feed(feed: &'a Feed) -> Self {
        let cursor = feed
            .children
            .iter()
            .position(|element| classify(element) == ElementKind::Message);

        Extraction {
            feed,
            cursor,
            messages: Vec::new(),
            progress_interval: constants::DEFAULT_PROGRESS_INTERVAL,
            progress: None,
        }
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;

        self
    }

    pub fn with_progress(mut self, observer: Box<dyn FnMut(usize) + 'a>) -> Self {
        self.progress = Some(observer);

        self
    }

    /// One transition per clock tick: divider elements are skipped,
    /// message elements append a record, anything else is terminal.
    /// End of children and unexpected structure reach the terminal state
    /// identically; the two are not distinguishable from the output.
    pub async fn harvest(
        mut self,
        viewport: &mut impl Viewport,
        clock: &impl Clock,
        delay_ms: u64,
    ) -> Vec<Message> {
        log::trace!("In harvest");
        log::info!("Extracting messages...");

        loop {
            clock.tick(delay_ms).await;

            let index = match self.cursor {
                Some(index) => index,
                None => break,
            };

            let element = match self.feed.children.get(index) {
                Some(element) => element,
                None => break,
            };

            viewport.scroll_into_view(index);

            match classify(element) {
                ElementKind::Divider => {
                    self.cursor = Some(index + 1);
                }
                ElementKind::Message => {
                    let message = Message::from_element(element, self.messages.last());
                    self.messages.push(message);
                    self.cursor = Some(index + 1);

                    let length = self.messages.len();
                    if length % self.progress_interval == 0 {
                        self.notify(length);
                    }
                }
                ElementKind::Other => break,
            }
        }

        log::info!("Added all messages: {}", self.messages.len());

        self.messages
    }

    fn notify(&mut self, length: usize) {
        match self.progress.as_mut() {
            Some(observer) => observer(length),
            None => log::info!("Messages added: {}", length),
        }
    }
}
