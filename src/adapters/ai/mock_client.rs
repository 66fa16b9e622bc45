//! Mock completion client for testing.
//!
//! Configurable replacement for the real completion service, allowing tests
//! to run without network access.
//!
//! # Features
//!
//! - Pre-queued replies consumed in order
//! - Error injection for resilience testing
//! - Call recording for verification
//! - Optional simulated latency

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse};

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    Success(String),
    Failure(MockFailure),
}

/// Mock failure kinds for testing error handling.
#[derive(Debug, Clone)]
pub enum MockFailure {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockFailure> for CompletionError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::RateLimited { retry_after_secs } => {
                CompletionError::rate_limited(retry_after_secs)
            }
            MockFailure::Unavailable { message } => CompletionError::unavailable(message),
            MockFailure::AuthenticationFailed => CompletionError::AuthenticationFailed,
            MockFailure::Network { message } => CompletionError::network(message),
            MockFailure::Timeout { timeout_secs } => CompletionError::Timeout { timeout_secs },
        }
    }
}

/// Mock completion client.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    delay: Duration,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues an error reply.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(failure));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Questions received, in call order.
    pub fn questions(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.question.clone())
            .collect()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Success("Mock answer".to_string()))
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Success(content) => Ok(CompletionResponse {
                content,
                model: "mock-model".to_string(),
            }),
            MockReply::Failure(failure) => Err(failure.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_replies_in_order() {
        let client = MockCompletionClient::new()
            .with_reply("first")
            .with_reply("second");

        let a = client
            .complete(CompletionRequest::question("q1"))
            .await
            .unwrap();
        let b = client
            .complete(CompletionRequest::question("q2"))
            .await
            .unwrap();

        assert_eq!(a.content, "first");
        assert_eq!(b.content, "second");
    }

    #[tokio::test]
    async fn returns_default_reply_when_queue_is_empty() {
        let client = MockCompletionClient::new();

        let response = client
            .complete(CompletionRequest::question("anything"))
            .await
            .unwrap();

        assert_eq!(response.content, "Mock answer");
    }

    #[tokio::test]
    async fn injects_configured_failures() {
        let client = MockCompletionClient::new().with_failure(MockFailure::RateLimited {
            retry_after_secs: 30,
        });

        let result = client.complete(CompletionRequest::question("q")).await;

        assert!(matches!(
            result,
            Err(CompletionError::RateLimited {
                retry_after_secs: 30
            })
        ));
    }

    #[tokio::test]
    async fn records_calls_for_verification() {
        let client = MockCompletionClient::new();

        client
            .complete(CompletionRequest::question("What is SEO?"))
            .await
            .unwrap();

        assert_eq!(client.call_count(), 1);
        assert_eq!(client.questions(), vec!["What is SEO?".to_string()]);
    }
}
