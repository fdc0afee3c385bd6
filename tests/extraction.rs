use std::io;

use feedharvest::error::Errors;
use feedharvest::export::{download_json, to_json, DownloadSink};
use feedharvest::extract;
use feedharvest::message::Message;
use feedharvest::options::Options;

struct MemorySink {
    delivered: Vec<(String, String)>,
}

impl MemorySink {
    fn new() -> Self {
        MemorySink { delivered: Vec::new() }
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, filename: &str, json: &str) -> io::Result<()> {
        self.delivered.push((filename.to_string(), json.to_string()));
        Ok(())
    }
}

fn document_of(body: &str) -> String {
    format!(
        r#"<div class="app">
             <main class="chat">
               <ol class="scrollerInner" aria-label="Messages in ">{}</ol>
             </main>
           </div>"#,
        body
    )
}

fn options() -> Options {
    Options {
        beautify: false,
        delay: 1,
    }
}

const FEED_BODY: &str = r#"
    <div class="scrollerSpacer"></div>
    <div class="divider_f3a7 dividerContent">May 1, 2024</div>
    <li class="cozyMessage_d3f1 groupStart_a2">
      <div class="contents">
        <img class="avatar" src="https://cdn.example/alice.png"/>
        <h2 class="header">
          <span class="username">alice</span>
          <span class="timestamp"><time datetime="2024-05-01T10:00:00Z">10:00</time></span>
        </h2>
        <div class="messageContent">good morning</div>
      </div>
    </li>
    <li class="cozyMessage_d3f1">
      <div class="contents">
        <span class="timestampVisibleOnHover"></span>
        <div class="messageContent">still here</div>
      </div>
    </li>
    <div class="divider_f3a7"></div>
    <li class="cozyMessage_d3f1 groupStart_a2">
      <div class="contents">
        <h2 class="header">
          <span class="username">bob</span>
          <span class="timestamp"><time datetime="2024-05-01T10:07:00Z">10:07</time></span>
        </h2>
        <div class="messageContent">hey alice</div>
      </div>
    </li>
    <form class="form_c1"></form>
    <li class="cozyMessage_d3f1">
      <div class="contents"><div class="messageContent">past the end</div></div>
    </li>"#;

#[test]
fn full_pipeline_extracts_until_first_other_element() {
    let messages = extract(document_of(FEED_BODY), &options()).unwrap();

    assert_eq!(messages.len(), 3);

    assert_eq!(messages[0].username, Some("alice".to_string()));
    assert_eq!(messages[0].text, Some("good morning".to_string()));

    // The follow-up message inherits alice's metadata.
    assert_eq!(messages[1].username, messages[0].username);
    assert_eq!(messages[1].date, messages[0].date);
    assert_eq!(messages[1].image, messages[0].image);
    assert_eq!(messages[1].text, Some("still here".to_string()));

    assert_eq!(messages[2].username, Some("bob".to_string()));
    // Bob's element has no avatar, so the image carries forward again.
    assert_eq!(messages[2].image, messages[0].image);
}

#[test]
fn exported_json_round_trips() {
    let messages = extract(document_of(FEED_BODY), &options()).unwrap();

    let json = to_json(&messages, true).unwrap();
    let parsed: Vec<Message> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, messages);

    let values: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert!(values[0]["date"].as_str().unwrap().starts_with("2024-05-01T10:00:00"));
}

#[test]
fn feed_without_messages_still_downloads_empty_array() {
    let document = document_of(r#"<div class="scrollerSpacer"></div>"#);
    let messages = extract(document, &options()).unwrap();

    assert!(messages.is_empty());

    let mut sink = MemorySink::new();
    download_json(&mut sink, &messages, "messages.json", false);

    assert_eq!(
        sink.delivered,
        vec![("messages.json".to_string(), "[]".to_string())]
    );
}

#[test]
fn empty_document_is_rejected() {
    assert_eq!(
        extract("   ".to_string(), &options()).unwrap_err(),
        Errors::DocumentNotProvided
    );
}

#[test]
fn non_xml_document_is_rejected() {
    assert_eq!(
        extract("just some text".to_string(), &options()).unwrap_err(),
        Errors::UnexpectedDocumentType
    );
}

#[test]
fn document_without_container_is_rejected() {
    assert_eq!(
        extract(r#"<div class="app"><ol></ol></div>"#.to_string(), &options()).unwrap_err(),
        Errors::ContainerNotFound
    );
}
