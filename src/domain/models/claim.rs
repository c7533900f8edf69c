use serde::{Deserialize, Serialize};

use super::ClaimStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    text: String,
    status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl Claim {
    pub fn new(text: impl Into<String>, status: ClaimStatus) -> Self {
        Self {
            text: text.into(),
            status,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_omitted_when_absent() {
        let claim = Claim::new("The bridge opened in 1932", ClaimStatus::Verified);
        let json = serde_json::to_value(&claim).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["status"], "verified");
    }

    #[test]
    fn test_source_round_trips_when_present() {
        let json = r#"{"text":"x","status":"false","source":"https://example.org"}"#;
        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.status(), ClaimStatus::False);
        assert_eq!(claim.source(), Some("https://example.org"));
    }
}
