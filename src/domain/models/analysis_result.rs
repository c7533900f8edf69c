use serde::{Deserialize, Serialize};

use super::{Claim, ClaimStatus, Verdict};

/// Confidence reported when the model reply could not be parsed.
pub const FALLBACK_CONFIDENCE: f64 = 50.0;

/// Summary shown when the backend could not be reached at all.
pub const CLIENT_FAILURE_SUMMARY: &str = "Failed to analyze. See console for details.";

const MIN_CONFIDENCE: f64 = 0.0;
const MAX_CONFIDENCE: f64 = 100.0;

/// Structured verdict for one article, as returned to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    verdict: Verdict,
    confidence: f64,
    summary: String,
    #[serde(default)]
    claims: Vec<Claim>,
    #[serde(default)]
    sources: Vec<String>,
}

impl AnalysisResult {
    pub fn new(verdict: Verdict, confidence: f64, summary: impl Into<String>) -> Self {
        Self {
            verdict,
            confidence: confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
            summary: summary.into(),
            claims: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Result substituted when the model reply is not the expected JSON.
    /// The raw reply becomes the summary so nothing the model said is lost.
    pub fn fallback(raw_text: impl Into<String>) -> Self {
        Self::new(Verdict::Uncertain, FALLBACK_CONFIDENCE, raw_text)
    }

    /// Placeholder rendered by clients when the backend call itself failed.
    pub fn client_failure() -> Self {
        Self::new(Verdict::Uncertain, 0.0, CLIENT_FAILURE_SUMMARY)
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Clamp confidence into 0..=100. Returns `None` for non-finite values.
    pub fn normalized(mut self) -> Option<Self> {
        if !self.confidence.is_finite() {
            return None;
        }
        self.confidence = self.confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        Some(self)
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn count_claims(&self, status: ClaimStatus) -> usize {
        self.claims.iter().filter(|c| c.status() == status).count()
    }

    pub fn has_claims(&self) -> bool {
        !self.claims.is_empty()
    }

    pub fn display_line(&self) -> String {
        format!(
            "{} ({:.0}% confidence)",
            self.verdict.label(),
            self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let result = AnalysisResult::fallback("the model rambled");
        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 50.0);
        assert_eq!(result.summary(), "the model rambled");
        assert!(result.claims().is_empty());
        assert!(result.sources().is_empty());
    }

    #[test]
    fn test_client_failure_has_zero_confidence() {
        let result = AnalysisResult::client_failure();
        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.summary(), CLIENT_FAILURE_SUMMARY);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{"verdict":"likely_real","confidence":80,"summary":"ok"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.claims().is_empty());
        assert!(result.sources().is_empty());
    }

    #[test]
    fn test_normalized_clamps_confidence() {
        let json = r#"{"verdict":"likely_fake","confidence":140,"summary":"s"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.normalized().unwrap().confidence(), 100.0);

        let json = r#"{"verdict":"likely_fake","confidence":-3.5,"summary":"s"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.normalized().unwrap().confidence(), 0.0);
    }

    #[test]
    fn test_serializes_all_fields() {
        let result = AnalysisResult::new(Verdict::LikelyReal, 91.0, "Consistent with reporting")
            .with_claim(Claim::new("Rates rose", ClaimStatus::Verified).with_source("Reuters"))
            .with_source("https://reuters.com");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verdict"], "likely_real");
        assert_eq!(json["confidence"], 91.0);
        assert_eq!(json["claims"][0]["source"], "Reuters");
        assert_eq!(json["sources"][0], "https://reuters.com");
    }

    #[test]
    fn test_count_claims_by_status() {
        let result = AnalysisResult::new(Verdict::Uncertain, 40.0, "mixed")
            .with_claim(Claim::new("a", ClaimStatus::Verified))
            .with_claim(Claim::new("b", ClaimStatus::False))
            .with_claim(Claim::new("c", ClaimStatus::False));

        assert_eq!(result.count_claims(ClaimStatus::False), 2);
        assert_eq!(result.count_claims(ClaimStatus::Unverified), 0);
        assert_eq!(result.display_line(), "Uncertain (40% confidence)");
    }
}
