use xmltree::{Element, XMLNode};

use crate::constants;
use crate::error::Errors;

/// Structural snapshot of the feed container: its element children in
/// document order. Built once per run; never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Feed {
    pub children: Vec<FeedElement>,
}

/// One child element of the feed container. All lookups are pure reads
/// of the parsed structure; absence is reported, never raised.
#[derive(Clone, Debug)]
pub struct FeedElement {
    element: Element,
}

impl Feed {
    pub fn from_document(document: &str) -> Result<Self, Errors> {
        log::trace!("In from_document");

        let root = Element::parse(document.as_bytes())
            .map_err(|_| Errors::XmlParseError)?;

        let container = find_container(&root).ok_or(Errors::ContainerNotFound)?;
        log::debug!("Found feed container: {}", container.name);

        let children = container
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|element| FeedElement { element: element.clone() })
            .collect();

        Ok(Feed { children })
    }
}

impl FeedElement {
    pub fn parse(fragment: &str) -> Result<Self, Errors> {
        let element = Element::parse(fragment.as_bytes())
            .map_err(|_| Errors::XmlParseError)?;

        Ok(FeedElement { element })
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.element
            .attributes
            .get("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// The `datetime` attribute of the heading's `time` element. The feed
    /// uses two heading layouts; the `h2` variant is checked first, then
    /// the `span` variant.
    pub fn timestamp_attribute(&self) -> Option<String> {
        let time = descendant_within(&self.element, constants::HEADING_TAG, "time")
            .or_else(|| descendant_within(&self.element, constants::HEADING_FALLBACK_TAG, "time"))?;

        non_empty(time.attributes.get("datetime")?)
    }

    pub fn image_source(&self) -> Option<String> {
        let image = first_descendant(&self.element, "img")?;

        non_empty(image.attributes.get("src")?)
    }

    /// Visible text of the content block adjacent to the heading. Present
    /// whenever the block exists, even when its text is empty.
    pub fn text_block(&self) -> Option<String> {
        let block = adjacent_block(&self.element, constants::HEADING_TAG)
            .or_else(|| adjacent_block(&self.element, constants::HEADING_FALLBACK_TAG))?;

        Some(text_content(block).trim().to_string())
    }

    pub fn author(&self) -> Option<String> {
        let heading = first_descendant(&self.element, constants::HEADING_TAG)?;

        let first_child = heading
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .next()?;

        non_empty(&text_content(first_child))
    }
}

fn find_container<'a>(element: &'a Element) -> Option<&'a Element> {
    if element.attributes.get("aria-label").map(String::as_str)
        == Some(constants::CONTAINER_ARIA_LABEL)
    {
        return Some(element);
    }

    for child in element.children.iter().filter_map(|node| node.as_element()) {
        if let Some(found) = find_container(child) {
            return Some(found);
        }
    }

    None
}

fn first_descendant<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    for child in element.children.iter().filter_map(|node| node.as_element()) {
        if child.name == tag {
            return Some(child);
        }

        if let Some(found) = first_descendant(child, tag) {
            return Some(found);
        }
    }

    None
}

// The structural equivalent of the selector "<outer> <inner>": the first
// <inner> element enclosed by an <outer> element, in document order.
fn descendant_within<'a>(element: &'a Element, outer: &str, inner: &str) -> Option<&'a Element> {
    for child in element.children.iter().filter_map(|node| node.as_element()) {
        if child.name == outer {
            if let Some(found) = first_descendant(child, inner) {
                return Some(found);
            }
        }

        if let Some(found) = descendant_within(child, outer, inner) {
            return Some(found);
        }
    }

    None
}

// The structural equivalent of "<tag> + div": a div that is the immediate
// next element sibling of a <tag> element.
fn adjacent_block<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    let elements: Vec<&Element> = element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .collect();

    for (index, child) in elements.iter().enumerate() {
        if child.name == tag {
            if let Some(next) = elements.get(index + 1) {
                if next.name == "div" {
                    return Some(next);
                }
            }
        }
    }

    for child in elements {
        if let Some(found) = adjacent_block(child, tag) {
            return Some(found);
        }
    }

    None
}

fn text_content(element: &Element) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    for node in element.children.iter() {
        match node {
            XMLNode::Text(text) => out.push_str(text),
            XMLNode::Element(child) => collect_text(child, out),
            _ => {}
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MESSAGE: &str = r#"
        <li class="cozyMessage groupStart">
          <div class="contents">
            <img class="avatar" src="https://cdn.example/alice.png"/>
            <h2 class="header">
              <span class="username">alice</span>
              <span class="timestamp"><time datetime="2024-05-01T10:00:00Z">10:00</time></span>
            </h2>
            <div class="messageContent">hello world</div>
          </div>
        </li>"#;

    const FOLLOW_UP_MESSAGE: &str = r#"
        <li class="cozyMessage">
          <div class="contents">
            <span class="timestampVisibleOnHover"></span>
            <div class="messageContent">follow-up</div>
          </div>
        </li>"#;

    #[test]
    fn full_message_exposes_all_fields() {
        let element = FeedElement::parse(FULL_MESSAGE).unwrap();

        assert_eq!(
            element.timestamp_attribute(),
            Some("2024-05-01T10:00:00Z".to_string())
        );
        assert_eq!(
            element.image_source(),
            Some("https://cdn.example/alice.png".to_string())
        );
        assert_eq!(element.text_block(), Some("hello world".to_string()));
        assert_eq!(element.author(), Some("alice".to_string()));
    }

    #[test]
    fn follow_up_message_exposes_only_text() {
        let element = FeedElement::parse(FOLLOW_UP_MESSAGE).unwrap();

        assert_eq!(element.timestamp_attribute(), None);
        assert_eq!(element.image_source(), None);
        assert_eq!(element.text_block(), Some("follow-up".to_string()));
        assert_eq!(element.author(), None);
    }

    #[test]
    fn span_variant_heading_yields_timestamp() {
        let element = FeedElement::parse(
            r#"<li class="cozyMessage">
                 <div class="contents">
                   <span class="header"><time datetime="2024-05-01T10:05:00Z">10:05</time></span>
                   <div class="messageContent">second</div>
                 </div>
               </li>"#,
        )
        .unwrap();

        assert_eq!(
            element.timestamp_attribute(),
            Some("2024-05-01T10:05:00Z".to_string())
        );
    }

    #[test]
    fn empty_datetime_counts_as_absent() {
        let element = FeedElement::parse(
            r#"<li class="cozyMessage">
                 <h2><span>bob</span><span><time datetime="">never</time></span></h2>
               </li>"#,
        )
        .unwrap();

        assert_eq!(element.timestamp_attribute(), None);
    }

    #[test]
    fn missing_container_is_reported() {
        let result = Feed::from_document(r#"<div class="chat"><ol></ol></div>"#);

        assert_eq!(result.unwrap_err(), Errors::ContainerNotFound);
    }

    #[test]
    fn container_children_keep_document_order() {
        let feed = Feed::from_document(
            r#"<div class="chat">
                 <ol aria-label="Messages in ">
                   <div class="divider"></div>
                   <li class="cozyMessage"></li>
                   <form class="form"></form>
                 </ol>
               </div>"#,
        )
        .unwrap();

        assert_eq!(feed.children.len(), 3);
        assert_eq!(feed.children[0].class_names(), vec!["divider"]);
        assert_eq!(feed.children[1].class_names(), vec!["cozyMessage"]);
        assert_eq!(feed.children[2].class_names(), vec!["form"]);
    }
}
