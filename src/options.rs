#[derive(Clone, Debug)]
pub struct Options {
    pub beautify: bool,
    pub delay: u64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            beautify: false,
            delay: 100,
        }
    }
}
