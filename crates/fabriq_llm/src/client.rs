//! Chat-completion client for the remote LLM service.
//!
//! The service contract is a single-turn chat completion: one user-role
//! message carrying the full prompt text, bearer-token authentication, and
//! a JSON body exposing at least one completion with message text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{LlmError, LlmResult};

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Boundary trait for sending a single prompt and receiving completion text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as the sole content of a single-turn conversation and
    /// return the first completion's text. Blocks the caller until the
    /// service responds.
    async fn complete(&self, prompt: &str) -> LlmResult<String>;
}

/// Reqwest-backed completion client.
pub struct ChatClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Create a client with an explicit key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// The bearer token comes from `FABRIQ_API_KEY`, falling back to
    /// `OPENAI_API_KEY`. `FABRIQ_MODEL` optionally overrides the model id.
    pub fn from_env() -> LlmResult<Self> {
        let api_key = ["FABRIQ_API_KEY", "OPENAI_API_KEY"]
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
            .ok_or(LlmError::MissingApiKey)?;

        let model = std::env::var("FABRIQ_MODEL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, model))
    }

    /// Override the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint (self-hosted gateways).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The model id requests are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for ChatClient {
    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_string()))
    }
}

// Wire types for the chat-completions contract.

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "build me a calculator".to_string(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "build me a calculator");
    }

    #[test]
    fn test_response_wire_shape() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "hello");
    }

    #[test]
    fn test_response_missing_fields_is_an_error() {
        let body = r#"{"id":"cmpl-1","object":"chat.completion"}"#;
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }

    #[test]
    fn test_client_construction_from_env() {
        std::env::remove_var("FABRIQ_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("FABRIQ_MODEL");

        assert!(matches!(
            ChatClient::from_env(),
            Err(LlmError::MissingApiKey)
        ));

        std::env::set_var("OPENAI_API_KEY", "fallback-key");
        let client = ChatClient::from_env().unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);

        std::env::set_var("FABRIQ_API_KEY", "primary-key");
        std::env::set_var("FABRIQ_MODEL", "custom-model");
        let client = ChatClient::from_env().unwrap();
        assert_eq!(client.api_key, "primary-key");
        assert_eq!(client.model(), "custom-model");

        std::env::remove_var("FABRIQ_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("FABRIQ_MODEL");
    }

    #[test]
    fn test_model_override() {
        let client = ChatClient::new("key", DEFAULT_MODEL).with_model("other-model");
        assert_eq!(client.model(), "other-model");
    }
}
