use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::{parse_analysis, ChatClient};
use crate::domain::{AnalysisResult, DomainError};

/// Error message returned when a request carries no text.
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// System prompt instructing the model to reply with the analysis JSON only.
pub const SYSTEM_PROMPT: &str = "\
You are a fact-checking assistant.
Analyze the user's news/article and provide the response in JSON format exactly as below:

{
  \"verdict\": \"likely_real\" | \"likely_fake\" | \"uncertain\",
  \"confidence\": number (0-100),
  \"summary\": string,
  \"claims\": [
    { \"text\": string, \"status\": \"verified\" | \"false\" | \"unverified\", \"source\": string (optional) }
  ],
  \"sources\": [string]
}

Do not include any extra text, only return valid JSON.";

pub struct VerifyNewsUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl VerifyNewsUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Send `text` to the model once and turn its reply into an [`AnalysisResult`].
    ///
    /// A reply that is not valid analysis JSON never fails the call; it yields
    /// [`AnalysisResult::fallback`] instead. Transport and provider errors do.
    pub async fn execute(&self, text: &str) -> Result<AnalysisResult, DomainError> {
        if text.is_empty() {
            return Err(DomainError::invalid_input(NO_TEXT_MESSAGE));
        }

        info!(
            "Verifying {} characters with {}",
            text.chars().count(),
            self.chat_client.model_name()
        );
        let start_time = Instant::now();

        let reply = self.chat_client.complete(SYSTEM_PROMPT, text).await?;
        let parsed = parse_analysis(&reply);

        info!(
            "Verdict {} in {:.2}s (fallback={})",
            parsed.result().verdict(),
            start_time.elapsed().as_secs_f64(),
            parsed.used_fallback()
        );

        Ok(parsed.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;
    use crate::domain::Verdict;

    #[tokio::test]
    async fn rejects_empty_text_without_calling_the_model() {
        let client = Arc::new(MockChatClient::new("{}"));
        let use_case = VerifyNewsUseCase::new(client.clone());

        let err = use_case.execute("").await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: No text provided");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn sends_fixed_prompt_and_article() {
        let client = Arc::new(MockChatClient::new(
            r#"{"verdict":"likely_real","confidence":75,"summary":"Plausible"}"#,
        ));
        let use_case = VerifyNewsUseCase::new(client.clone());

        let result = use_case.execute("Local bakery wins award").await.unwrap();
        assert_eq!(result.verdict(), Verdict::LikelyReal);
        assert_eq!(client.call_count(), 1);

        let (system, user) = client.last_request().unwrap();
        assert_eq!(system, SYSTEM_PROMPT);
        assert_eq!(user, "Local bakery wins award");
    }

    #[tokio::test]
    async fn malformed_reply_yields_fallback() {
        let client = Arc::new(MockChatClient::new("This looks fine to me."));
        let use_case = VerifyNewsUseCase::new(client);

        let result = use_case.execute("Some article").await.unwrap();
        assert_eq!(result, AnalysisResult::fallback("This looks fine to me."));
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let client = Arc::new(MockChatClient::failing("401 Unauthorized"));
        let use_case = VerifyNewsUseCase::new(client);

        let err = use_case.execute("Some article").await.unwrap_err();
        assert!(err.is_llm_error());
    }
}
