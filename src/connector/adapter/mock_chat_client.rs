use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Reply used by `--mock-llm` so the server can run without an API key.
pub const DEFAULT_MOCK_REPLY: &str = r#"{
  "verdict": "uncertain",
  "confidence": 50,
  "summary": "Mock analysis: no language model was contacted.",
  "claims": [],
  "sources": []
}"#;

/// A [`ChatClient`] that returns a canned reply (or a canned error) and
/// records what it was asked.
pub struct MockChatClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl MockChatClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// A client whose every call fails with a provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `(system, user)` pair of the most recent call.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_REPLY)
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some((system.to_string(), user.to_string()));
        }
        self.reply.clone().map_err(DomainError::llm)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::parse_analysis;

    #[tokio::test]
    async fn test_default_reply_is_valid_analysis() {
        let client = MockChatClient::default();
        let reply = client.complete("system", "user").await.unwrap();
        assert!(!parse_analysis(&reply).used_fallback());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_client_returns_llm_error() {
        let client = MockChatClient::failing("boom");
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(err.is_llm_error());
        assert_eq!(
            client.last_request(),
            Some(("s".to_string(), "u".to_string()))
        );
    }
}
