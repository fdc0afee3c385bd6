// The feed container carries this accessibility label verbatim,
// trailing space included.
pub const CONTAINER_ARIA_LABEL: &str = "Messages in ";

pub const MESSAGE_CLASS_SUBSTRING: &str = "cozyMessage";
pub const DIVIDER_CLASS_SUBSTRING: &str = "divider";

pub const HEADING_TAG: &str = "h2";
pub const HEADING_FALLBACK_TAG: &str = "span";

pub const DEFAULT_EXPORT_FILENAME: &str = "messages.json";
pub const DEFAULT_SCROLL_POLL_MS: u64 = 500;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;
