// src/llm/error.rs
// Failure taxonomy for remote calls. Never surfaced past the companion adapters.

use std::time::Duration;

use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LlmError {
    /// Network, DNS, TLS or connection failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("remote service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// No choice, or a choice without text content.
    #[error("response contained no usable content")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    /// Structured output did not conform to the requested schema.
    #[error("schema violation: {0}")]
    Schema(String),
}

impl LlmError {
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Transport(_) => "transport",
            LlmError::Status { .. } => "status",
            LlmError::Timeout(_) => "timeout",
            LlmError::EmptyResponse => "empty_response",
            LlmError::Malformed(_) => "malformed",
            LlmError::Schema(_) => "schema",
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LlmError::Malformed(e.to_string())
        } else {
            LlmError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        // Well-formed JSON with the wrong shape is a schema problem; anything else is malformed.
        match e.classify() {
            Category::Data => LlmError::Schema(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => LlmError::Malformed(e.to_string()),
        }
    }
}
