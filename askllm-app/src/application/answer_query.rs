use crate::domain::Answer;
use crate::infrastructure::deepseek::DeepSeekClient;
use askllm_errors::AppError;

/// The single use case: forward a query to DeepSeek and hand back the answer.
pub struct AnswerQuery {
    client: DeepSeekClient,
}

impl AnswerQuery {
    pub fn new(api_key: String) -> Self {
        Self {
            client: DeepSeekClient::new(api_key),
        }
    }

    pub fn with_client(client: DeepSeekClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self, query: String) -> Result<Answer, AppError> {
        tracing::info!("Received request for DeepSeek: {}", query);

        match self.client.complete(&query).await? {
            Some(text) => {
                tracing::info!("DeepSeek LLM response: {}", text);
                Ok(Answer::new(text))
            }
            None => {
                tracing::info!("DeepSeek LLM did not provide a text response.");
                Ok(Answer::fallback())
            }
        }
    }
}
