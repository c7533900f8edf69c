mod anthropic_client;
mod mock_chat_client;
mod openai_client;
mod provider;
mod verify_api_client;

pub use anthropic_client::*;
pub use mock_chat_client::*;
pub use openai_client::*;
pub use provider::*;
pub use verify_api_client::*;
