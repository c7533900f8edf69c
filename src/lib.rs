pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::{Commands, OutputFormat};

pub use application::{parse_analysis, ChatClient, ParsedAnalysis, VerifyNewsUseCase, SYSTEM_PROMPT};

pub use connector::{
    AnthropicClient, LlmProvider, MockChatClient, OpenAiClient, VerifyApiClient,
};

pub use connector::api::{Container, ContainerConfig, Router};
pub use connector::http::{create_router, AppState};

pub use domain::{
    AnalysisResult, Claim, ClaimStatus, DomainError, ErrorBody, Verdict, VerifyEnvelope,
    VerifyRequest,
};
