// src/llm/provider/mod.rs
// Provider trait and request types for the remote text-generation service

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::error::LlmError;

pub mod openai;

/// Role-tagged message in the wire format shared by chat-completion APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }
}

/// Everything a provider needs for one completion, minus the model name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Output constraint, e.g. a `json_schema` response format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            max_tokens: None,
            temperature: None,
            response_format: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_format(mut self, format: Value) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Remote chat-completion service.
///
/// Implementations perform exactly one attempt per call and return the text
/// content of the first choice.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// Run one completion, failing with `LlmError::Timeout` once `limit` elapses.
pub async fn complete_within(
    provider: &dyn LlmProvider,
    request: &CompletionRequest,
    limit: Duration,
) -> Result<String, LlmError> {
    debug!(
        "Dispatching completion to {}: {} messages, timeout {:?}",
        provider.name(),
        request.messages.len(),
        limit
    );

    match tokio::time::timeout(limit, provider.complete(request)).await {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout(limit)),
    }
}
