//! Mock completion client for testing.
//!
//! Returns scripted responses in order and captures every prompt so tests
//! can verify what the generation pipeline asked for, without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::CompletionClient;
use crate::error::{LlmError, LlmResult};

/// Scripted completion client.
///
/// Responses are consumed front to back; running past the end of the script
/// is a `MalformedResponse` error so an under-scripted test fails loudly
/// instead of looping.
#[derive(Clone, Default)]
pub struct MockCompletionClient {
    responses: Arc<Mutex<Vec<String>>>,
    index: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockCompletionClient {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the response script.
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.responses.lock().expect("mock lock poisoned") =
            responses.into_iter().map(Into::into).collect();
        self
    }

    /// Append one response to the script.
    pub fn push_response(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .push(response.into());
    }

    /// Make every subsequent call fail with an API error carrying `body`.
    pub fn simulate_api_error(self, body: impl Into<String>) -> Self {
        *self.fail_with.lock().expect("mock lock poisoned") = Some(body.into());
        self
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mock lock poisoned").clone()
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("mock lock poisoned").len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        self.prompts
            .lock()
            .expect("mock lock poisoned")
            .push(prompt.to_string());

        if let Some(body) = self.fail_with.lock().expect("mock lock poisoned").clone() {
            return Err(LlmError::Api { status: 500, body });
        }

        let index = self.index.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .get(index)
            .cloned()
            .ok_or_else(|| {
                LlmError::MalformedResponse(format!("mock response script exhausted at call {}", index + 1))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_scripted_responses_in_order() {
        let mock = MockCompletionClient::new().with_responses(["first", "second"]);

        assert_eq!(mock.complete("a").await.unwrap(), "first");
        assert_eq!(mock.complete("b").await.unwrap(), "second");
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.prompts(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_exhaustion_is_an_error() {
        let mock = MockCompletionClient::new().with_responses(["only"]);

        mock.complete("a").await.unwrap();
        assert!(matches!(
            mock.complete("b").await,
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_failure_simulation() {
        let mock = MockCompletionClient::new()
            .with_responses(["unused"])
            .simulate_api_error("boom");

        match mock.complete("a").await {
            Err(LlmError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }
}
