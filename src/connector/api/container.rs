use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{ChatClient, VerifyNewsUseCase};
use crate::connector::http::AppState;
use crate::connector::{
    AnthropicClient, LlmProvider, MockChatClient, OpenAiClient, VerifyApiClient,
};

pub struct ContainerConfig {
    pub provider: LlmProvider,
    /// Explicit key; when `None` the provider's own environment variable is read.
    pub api_key: Option<String>,
    /// Override of the provider's default base URL.
    pub base_url: Option<String>,
    /// Override of the provider's default model.
    pub model: Option<String>,
    pub timeout_secs: u64,
    /// Answer every request with a canned reply instead of calling a provider.
    pub mock_llm: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            api_key: None,
            base_url: None,
            model: None,
            timeout_secs: crate::connector::DEFAULT_TIMEOUT_SECS,
            mock_llm: false,
        }
    }
}

impl ContainerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    pub fn resolved_model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(self.provider.api_key_env()).ok())
            .filter(|k| !k.is_empty())
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    verify_use_case: Arc<VerifyNewsUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client = Self::build_chat_client(&config);
        Ok(Self::with_chat_client(config, chat_client))
    }

    /// Build a container around an already constructed client.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        let verify_use_case = Arc::new(VerifyNewsUseCase::new(chat_client.clone()));
        Self {
            chat_client,
            verify_use_case,
            config,
        }
    }

    fn build_chat_client(config: &ContainerConfig) -> Arc<dyn ChatClient> {
        if config.mock_llm {
            debug!("Using mock chat client");
            return Arc::new(MockChatClient::default());
        }

        let api_key = config.resolved_api_key();
        if api_key.is_none() {
            warn!(
                "No API key configured for {} (set {} or --api-key); requests will fail",
                config.provider,
                config.provider.api_key_env()
            );
        }

        let base_url = config.resolved_base_url();
        let model = config.resolved_model();
        debug!(
            "Using {} provider at {} with model {}",
            config.provider, base_url, model
        );

        match config.provider {
            LlmProvider::Deepseek | LlmProvider::Openai => Arc::new(OpenAiClient::new(
                api_key,
                model,
                base_url,
                config.timeout(),
            )),
            LlmProvider::Anthropic => Arc::new(AnthropicClient::new(
                api_key.unwrap_or_default(),
                model,
                base_url,
                config.timeout(),
            )),
        }
    }

    pub fn verify_use_case(&self) -> Arc<VerifyNewsUseCase> {
        self.verify_use_case.clone()
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.verify_use_case())
    }

    pub fn remote_client(&self, server: &str) -> VerifyApiClient {
        VerifyApiClient::new(server, self.config.timeout())
    }

    pub fn model_name(&self) -> &str {
        self.chat_client.model_name()
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults_apply() {
        let config = ContainerConfig::default();
        assert_eq!(config.resolved_base_url(), "https://api.deepseek.com");
        assert_eq!(config.resolved_model(), "deepseek-chat");
    }

    #[test]
    fn test_overrides_win() {
        let config = ContainerConfig {
            provider: LlmProvider::Openai,
            base_url: Some("http://localhost:1234/v1".to_string()),
            model: Some("local-model".to_string()),
            ..ContainerConfig::default()
        };
        let container = Container::new(config).unwrap();
        assert_eq!(container.model_name(), "local-model");
        assert_eq!(
            container.config().resolved_base_url(),
            "http://localhost:1234/v1"
        );
    }

    #[test]
    fn test_anthropic_provider_builds_anthropic_client() {
        let config = ContainerConfig {
            provider: LlmProvider::Anthropic,
            api_key: Some("sk-ant-test".to_string()),
            ..ContainerConfig::default()
        };
        let container = Container::new(config).unwrap();
        assert_eq!(container.model_name(), "claude-haiku-4-5");
        assert_eq!(
            container.config().resolved_base_url(),
            "https://api.anthropic.com"
        );
    }

    #[test]
    fn test_mock_llm_uses_mock_client() {
        let config = ContainerConfig {
            mock_llm: true,
            ..ContainerConfig::default()
        };
        let container = Container::new(config).unwrap();
        assert_eq!(container.model_name(), "mock");
    }

    #[test]
    fn test_explicit_empty_key_is_ignored() {
        let config = ContainerConfig {
            provider: LlmProvider::Anthropic,
            api_key: Some(String::new()),
            ..ContainerConfig::default()
        };
        assert!(config.resolved_api_key().is_none());
    }
}
