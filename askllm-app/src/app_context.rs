use std::sync::Arc;

use crate::application::AnswerQuery;

/// Immutable per-process state shared by all request handlers.
#[derive(Clone)]
pub struct AppContext {
    pub answer_query: Arc<AnswerQuery>,
}

impl AppContext {
    pub fn new(api_key: String) -> Self {
        Self {
            answer_query: Arc::new(AnswerQuery::new(api_key)),
        }
    }

    /// Read the upstream token from the environment. Startup-fatal if unset;
    /// no request should ever be served without it.
    pub fn from_env() -> Self {
        let api_key = std::env::var("CHUTES_API_TOKEN")
            .expect("CHUTES_API_TOKEN environment variable is not set");
        Self::new(api_key)
    }
}
