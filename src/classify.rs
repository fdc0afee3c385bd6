use crate::constants;
use crate::feed::FeedElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Divider,
    Message,
    Other,
}

/// Kind of a feed child, decided by class-name substring match alone.
/// Divider wins over message, matching the per-tick transition order.
pub fn classify(element: &FeedElement) -> ElementKind {
    if has_class_containing(element, constants::DIVIDER_CLASS_SUBSTRING) {
        return ElementKind::Divider;
    }

    if has_class_containing(element, constants::MESSAGE_CLASS_SUBSTRING) {
        return ElementKind::Message;
    }

    ElementKind::Other
}

fn has_class_containing(element: &FeedElement, substring: &str) -> bool {
    element
        .class_names()
        .iter()
        .any(|name| name.contains(substring))
}
