//! Completion Client Port - Interface for the text-completion service.
//!
//! Abstracts the external service that answers free-text marketing questions
//! during the open-question phase, so the dialogue engine can be tested with
//! a fake collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::TraceId;

/// Port for the external question-answering service.
///
/// Implementations translate between the provider-specific API and these
/// types, apply their own bounded timeout, and may retry transient failures
/// internally; the caller never retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Answers a single free-text question.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// A question forwarded from the open-question phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// The user's question, verbatim.
    pub question: String,
    /// Optional cap overriding the client's configured answer length.
    pub max_tokens: Option<u32>,
    /// Correlation id for tracing.
    pub trace_id: TraceId,
}

impl CompletionRequest {
    /// Creates a request for a question with a fresh trace id.
    pub fn question(text: impl Into<String>) -> Self {
        Self {
            question: text.into(),
            max_tokens: None,
            trace_id: TraceId::new(),
        }
    }

    /// Overrides the answer-length cap for this request.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

/// Answer returned by the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated answer text.
    pub content: String,
    /// Model that produced the answer.
    pub model: String,
}

/// Completion service errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl CompletionError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is worth retrying inside the client.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CompletionError::RateLimited { .. }
                | CompletionError::Unavailable { .. }
                | CompletionError::Network(_)
                | CompletionError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_sets_question_and_cap() {
        let request = CompletionRequest::question("What is CTR?").with_max_tokens(120);

        assert_eq!(request.question, "What is CTR?");
        assert_eq!(request.max_tokens, Some(120));
    }

    #[test]
    fn requests_carry_distinct_trace_ids() {
        let a = CompletionRequest::question("a");
        let b = CompletionRequest::question("b");
        assert_ne!(a.trace_id, b.trace_id);
    }

    #[test]
    fn retryable_classification() {
        assert!(CompletionError::rate_limited(30).is_retryable());
        assert!(CompletionError::unavailable("down").is_retryable());
        assert!(CompletionError::network("reset").is_retryable());
        assert!(CompletionError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!CompletionError::AuthenticationFailed.is_retryable());
        assert!(!CompletionError::parse("bad json").is_retryable());
        assert!(!CompletionError::InvalidRequest("bad".into()).is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            CompletionError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            CompletionError::Timeout { timeout_secs: 15 }.to_string(),
            "request timed out after 15s"
        );
    }
}
