use tracing::{debug, warn};

use crate::domain::{AnalysisResult, DomainError};

/// Outcome of turning a model reply into an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAnalysis {
    result: AnalysisResult,
    fallback_reason: Option<String>,
}

impl ParsedAnalysis {
    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn into_result(self) -> AnalysisResult {
        self.result
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }
}

/// Parse the raw text returned by the model into an [`AnalysisResult`].
///
/// The model is instructed to return bare JSON, but replies wrapped in code
/// fences or prose are common, so when the whole reply does not parse the
/// outermost `{...}` span is tried as well. If neither parses, the reply is
/// kept verbatim as the summary of [`AnalysisResult::fallback`].
pub fn parse_analysis(raw: &str) -> ParsedAnalysis {
    let trimmed = raw.trim();

    let first_err = match parse_strict(trimmed) {
        Ok(result) => {
            return ParsedAnalysis {
                result,
                fallback_reason: None,
            }
        }
        Err(e) => e,
    };

    if let Some(span) = outermost_object(trimmed).filter(|span| *span != trimmed) {
        match parse_strict(span) {
            Ok(result) => {
                debug!("Parsed model reply after stripping surrounding text");
                return ParsedAnalysis {
                    result,
                    fallback_reason: None,
                };
            }
            Err(e) => debug!("Embedded JSON object did not parse either: {e}"),
        }
    }

    warn!("Failed to parse model reply as analysis JSON: {first_err}. Using fallback result.");
    ParsedAnalysis {
        result: AnalysisResult::fallback(raw),
        fallback_reason: Some(first_err.to_string()),
    }
}

fn parse_strict(text: &str) -> Result<AnalysisResult, DomainError> {
    serde_json::from_str::<AnalysisResult>(text)
        .map_err(|e| DomainError::parse(e.to_string()))?
        .normalized()
        .ok_or_else(|| DomainError::parse("confidence is not a finite number"))
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
