use clap::ValueEnum;

/// Chat-completion backend the server forwards articles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LlmProvider {
    /// DeepSeek, through its OpenAI-compatible API.
    #[default]
    Deepseek,
    /// OpenAI or any other OpenAI-compatible server.
    Openai,
    /// Anthropic Messages API.
    Anthropic,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Deepseek => "deepseek",
            LlmProvider::Openai => "openai",
            LlmProvider::Anthropic => "anthropic",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            LlmProvider::Deepseek => "https://api.deepseek.com",
            LlmProvider::Openai => "https://api.openai.com/v1",
            LlmProvider::Anthropic => "https://api.anthropic.com",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Deepseek => "deepseek-chat",
            LlmProvider::Openai => "gpt-4o-mini",
            LlmProvider::Anthropic => "claude-haiku-4-5",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            LlmProvider::Deepseek => "DEEPSEEK_API_KEY",
            LlmProvider::Openai => "OPENAI_API_KEY",
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deepseek_is_default() {
        let provider = LlmProvider::default();
        assert_eq!(provider, LlmProvider::Deepseek);
        assert_eq!(provider.default_base_url(), "https://api.deepseek.com");
        assert_eq!(provider.default_model(), "deepseek-chat");
        assert_eq!(provider.api_key_env(), "DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_parses_from_cli_value() {
        assert_eq!(
            LlmProvider::from_str("anthropic", true).unwrap(),
            LlmProvider::Anthropic
        );
        assert!(LlmProvider::from_str("ollama", true).is_err());
    }
}
