//! Completion client adapters.
//!
//! Implementations of the CompletionClient port:
//!
//! - `MockCompletionClient` - Configurable mock for testing
//! - `OpenAiCompletionClient` - OpenAI chat completions

mod mock_client;
mod openai_client;

pub use mock_client::{MockCompletionClient, MockFailure};
pub use openai_client::{OpenAiCompletionClient, OpenAiConfig};
