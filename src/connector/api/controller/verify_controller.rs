use std::path::PathBuf;

use anyhow::{bail, Result};
use tokio::io::AsyncReadExt;

use crate::cli::OutputFormat;
use crate::domain::{AnalysisResult, VerifyEnvelope};

use super::super::Container;

pub struct VerifyController<'a> {
    container: &'a Container,
}

impl<'a> VerifyController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn verify(
        &self,
        text: Option<String>,
        file: Option<PathBuf>,
        server: Option<String>,
        format: OutputFormat,
    ) -> Result<String> {
        let text = Self::read_input(text, file).await?;
        if text.is_empty() {
            bail!("No text provided");
        }

        let result = match server {
            Some(server) => self.container.remote_client(&server).analyze(&text).await?,
            None => self.container.verify_use_case().execute(&text).await?,
        };

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&VerifyEnvelope::new(
                result,
            ))?),
            OutputFormat::Text => Ok(format_result(&result)),
        }
    }

    async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
        let raw = match (text, file) {
            (Some(text), _) => text,
            (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
            (None, None) => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };
        Ok(raw.trim().to_string())
    }
}

pub fn format_result(result: &AnalysisResult) -> String {
    let mut output = format!("Verdict: {}\n", result.display_line());

    output.push_str("\nSummary:\n");
    for line in result.summary().lines() {
        output.push_str(&format!("  {}\n", line));
    }

    if result.has_claims() {
        output.push_str(&format!("\nClaims ({}):\n", result.claims().len()));
        for (i, claim) in result.claims().iter().enumerate() {
            output.push_str(&format!(
                "  {}. [{}] {}\n",
                i + 1,
                claim.status().label(),
                claim.text()
            ));
            if let Some(source) = claim.source() {
                output.push_str(&format!("     Source: {}\n", source));
            }
        }
    }

    if !result.sources().is_empty() {
        output.push_str("\nSources:\n");
        for source in result.sources() {
            output.push_str(&format!("  - {}\n", source));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;
    use crate::domain::{Claim, ClaimStatus, Verdict};

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            mock_llm: true,
            ..ContainerConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_verify_locally_with_mock_llm() {
        let container = mock_container();
        let output = VerifyController::new(&container)
            .verify(Some("Some headline".to_string()), None, None, OutputFormat::Json)
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["result"]["verdict"], "uncertain");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let container = mock_container();
        let err = VerifyController::new(&container)
            .verify(
                Some("Some headline".to_string()),
                None,
                Some(format!("http://{}", addr)),
                OutputFormat::Json,
            )
            .await
            .unwrap_err();

        let domain_err = err.downcast_ref::<crate::domain::DomainError>().unwrap();
        assert!(matches!(domain_err, crate::domain::DomainError::Remote(_)));
    }

    #[tokio::test]
    async fn test_empty_input_is_an_error() {
        let container = mock_container();
        let result = VerifyController::new(&container)
            .verify(Some("   ".to_string()), None, None, OutputFormat::Text)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_format_full_result() {
        let result = AnalysisResult::new(Verdict::LikelyFake, 88.0, "Fabricated quote.")
            .with_claim(
                Claim::new("The senator said X", ClaimStatus::False).with_source("senate.gov"),
            )
            .with_source("https://senate.gov");

        let text = format_result(&result);
        assert!(text.starts_with("Verdict: Likely Fake (88% confidence)"));
        assert!(text.contains("  Fabricated quote.\n"));
        assert!(text.contains("Claims (1):\n  1. [False] The senator said X\n     Source: senate.gov"));
        assert!(text.contains("Sources:\n  - https://senate.gov"));
    }

    #[test]
    fn test_format_omits_empty_sections() {
        let text = format_result(&AnalysisResult::fallback("raw reply"));
        assert!(!text.contains("Claims"));
        assert!(!text.contains("Sources"));
        assert!(text.contains("Uncertain (50% confidence)"));
    }
}
