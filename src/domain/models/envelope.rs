use serde::{Deserialize, Serialize};

use super::AnalysisResult;

/// Body accepted by `POST /api/verify-news`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl VerifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// The submitted text, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Successful response: the analysis wrapped as `{"result": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEnvelope {
    pub result: AnalysisResult,
}

impl VerifyEnvelope {
    pub fn new(result: AnalysisResult) -> Self {
        Self { result }
    }
}

/// Error response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
