/// The text relayed back to the caller for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
}

const FALLBACK_TEXT: &str = "DeepSeek LLM could not generate a response to your query.";

impl Answer {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// The upstream call succeeded but yielded no usable text. Still a
    /// success from the caller's point of view.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
        }
    }
}
