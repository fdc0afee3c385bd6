use tokio::runtime::Runtime;
use std::fs::File;
use std::process;
use std::io::Read;

pub mod classify;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod extraction;
pub mod feed;
pub mod message;
pub mod options;
pub mod scroll;
pub mod utility;

use clock::IntervalClock;
use error::Errors;
use extraction::Extraction;
use feed::Feed;
use message::Message;
use options::Options;
use scroll::{run_scroll_to_top, StaticViewport};

/// Run both phases over a feed snapshot: scroll the viewport to its
/// topmost extent, then walk the container's children into a record
/// sequence. The sequence is returned to the caller; export is a
/// separate step (see `export::download_json`).
pub fn extract(document: String, options: &Options) -> Result<Vec<Message>, Errors> {
    log::trace!("In extract");

    if document.trim().is_empty() {
        log::info!("Document not provided, aborting...");
        return Err(Errors::DocumentNotProvided);
    }

    if !utility::is_valid_xml(&document) {
        log::info!("Document is not valid XML");
        return Err(Errors::UnexpectedDocumentType);
    }

    let feed = Feed::from_document(&document)?;
    log::info!("Feed container has {} child elements", feed.children.len());

    let (scroll_poll_ms, progress_interval) = {
        let config = config::CONFIG.read().unwrap();
        (config.pacing.scroll_poll_ms, config.pacing.progress_interval)
    };

    return Runtime::new().unwrap().block_on(async {
        let clock = IntervalClock;
        let mut viewport = StaticViewport;

        run_scroll_to_top(&mut viewport, &clock, scroll_poll_ms).await;

        let messages = Extraction::from_feed(&feed)
            .with_progress_interval(progress_interval)
            .harvest(&mut viewport, &clock, options.delay)
            .await;

        Ok(messages)
    });
}

pub fn extract_file(file_name: &str, options: &Options) -> Result<Vec<Message>, Errors> {
    log::trace!("In extract_file");
    log::debug!("file_name: {}", file_name);

    let mut document = String::new();

    let mut file = File::open(file_name).unwrap_or_else(|err| {
        eprintln!("Failed to open file: {}", err);
        process::exit(1);
    });

    file.read_to_string(&mut document).unwrap_or_else(|err| {
        eprintln!("Failed to read file: {}", err);
        process::exit(1);
    });

    extract(document, options)
}
