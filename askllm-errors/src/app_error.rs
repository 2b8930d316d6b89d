use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Per-request failure kinds. The `Display` text carries internal detail for
/// the server log; callers only ever see `user_message`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("query parameter missing or empty")]
    MissingQuery,

    #[error("failed to encode request payload: {0}")]
    EncodeFailed(String),

    #[error("failed to reach DeepSeek API: {0}")]
    UpstreamUnreachable(String),

    #[error("DeepSeek API returned status {0}")]
    UpstreamError(u16),

    #[error("invalid response from DeepSeek API: {0}")]
    MalformedResponse(String),
}

impl AppError {
    /// Fixed caller-visible text. Upstream status codes and bodies stay out
    /// of these messages so they are never relayed to the caller.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingQuery => {
                "Please provide a query with the 'q' parameter. Example: /?q=Hello"
            }
            Self::EncodeFailed(_) => "Internal server error.",
            Self::UpstreamUnreachable(_) => {
                "Failed to contact DeepSeek LLM. Please try again later."
            }
            Self::UpstreamError(_) => "Error from DeepSeek LLM. Please try again later.",
            Self::MalformedResponse(_) => {
                "Internal server error: invalid response format from DeepSeek LLM."
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.user_message()).into_response()
    }
}
