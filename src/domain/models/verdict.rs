use serde::{Deserialize, Serialize};

/// Overall judgement the model reaches about an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyReal,
    LikelyFake,
    #[default]
    Uncertain,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelyReal => "likely_real",
            Verdict::LikelyFake => "likely_fake",
            Verdict::Uncertain => "uncertain",
        }
    }

    /// Human-readable label used by the text renderer.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyReal => "Likely Real",
            Verdict::LikelyFake => "Likely Fake",
            Verdict::Uncertain => "Uncertain",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a single claim extracted from an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Verified,
    False,
    Unverified,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "verified",
            ClaimStatus::False => "false",
            ClaimStatus::Unverified => "unverified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "Verified",
            ClaimStatus::False => "False",
            ClaimStatus::Unverified => "Unverified",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
