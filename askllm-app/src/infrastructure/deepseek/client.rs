use std::time::Duration;

use askllm_errors::AppError;

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

const CHUTES_API_URL: &str = "https://llm.chutes.ai/v1/chat/completions";
const MODEL: &str = "deepseek-ai/DeepSeek-R1";

// LLM responses can be slow; keep this generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct DeepSeekClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl DeepSeekClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, CHUTES_API_URL.to_string(), REQUEST_TIMEOUT)
    }

    /// Point the client at a different completions endpoint, with a custom
    /// timeout. Used by tests to talk to a local stub.
    pub fn with_endpoint(api_key: String, endpoint: String, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            endpoint,
        }
    }

    /// Send one chat-completion request and extract the answer text.
    ///
    /// Returns `Ok(None)` when the upstream call succeeded but produced no
    /// usable choice; callers decide what to say in that case.
    pub async fn complete(&self, query: &str) -> Result<Option<String>, AppError> {
        let request = ChatCompletionRequest::new(MODEL, query.to_string());
        let body =
            serde_json::to_vec(&request).map_err(|e| AppError::EncodeFailed(e.to_string()))?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Error from DeepSeek API. Status: {}, Body: {}", status, body);
            return Err(AppError::UpstreamError(status.as_u16()));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty()))
    }
}
