//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionClient` - Text-completion service answering free-text questions
//! - `SessionStore` - Per-chat session persistence
//! - `TrendSource` - PPC benchmark table fetching

mod completion;
mod session_store;
mod trend_source;

pub use completion::{
    CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
};
pub use session_store::{SessionStore, SessionStoreError};
pub use trend_source::{ScrapeError, TrendRow, TrendSource};
