use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::domain::{AnalysisResult, DomainError, VerifyRequest};

pub const VERIFY_PATH: &str = "/api/verify-news";

/// Client for a running verification server.
///
/// Posts `{"text": ...}` to `/api/verify-news` and reads back the analysis.
/// Both the `{"result": ...}` envelope and a bare result object are accepted.
pub struct VerifyApiClient {
    client: reqwest::Client,
    url: String,
}

impl VerifyApiClient {
    /// `server` may be the server root (`http://localhost:5000`) or the full
    /// endpoint URL.
    pub fn new(server: &str, timeout: Duration) -> Self {
        let trimmed = server.trim_end_matches('/');
        let url = if trimmed.ends_with(VERIFY_PATH) {
            trimmed.to_string()
        } else {
            format!("{trimmed}{VERIFY_PATH}")
        };
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&VerifyRequest::new(text))
            .send()
            .await
            .map_err(|e| DomainError::remote(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::remote(format!("API error: {status} - {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::remote(format!("invalid response body: {e}")))?;
        debug!("VerifyApiClient response: {body}");

        Self::unwrap_envelope(body)
    }

    /// A missing or `null` `result` means the body itself is the result.
    fn unwrap_envelope(mut body: Value) -> Result<AnalysisResult, DomainError> {
        let has_result = body.get("result").is_some_and(|r| !r.is_null());
        let inner = if has_result {
            body["result"].take()
        } else {
            body
        };
        serde_json::from_value(inner)
            .map_err(|e| DomainError::remote(format!("unexpected result shape: {e}")))
    }
}
