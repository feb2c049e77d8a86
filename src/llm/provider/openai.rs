// src/llm/provider/openai.rs
// OpenAI-compatible chat completions provider

use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::{debug, error};

use super::{CompletionRequest, LlmProvider};
use crate::config::CompanionConfig;
use crate::llm::error::LlmError;

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn from_config(config: &CompanionConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            "Initialized OpenAI provider: model={}, base_url={}",
            config.model, config.openai_base_url
        );

        Self::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.model.clone(),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Full JSON body for `/v1/chat/completions`.
    pub fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": request.messages,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(format) = &request.response_format {
            body["response_format"] = format.clone();
        }

        body
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let start = Instant::now();
        let body = self.request_body(request);

        let response = self
            .client
            .post(self.completions_url())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error {}: {}", status, error_text);
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let text = response.text().await?;
        let raw: Value =
            serde_json::from_str(&text).map_err(|e| LlmError::Malformed(e.to_string()))?;

        debug!(
            "OpenAI completion finished in {}ms (model={})",
            start.elapsed().as_millis(),
            self.model
        );

        extract_message_content(&raw)
    }
}

/// Pull `choices[0].message.content` out of a chat completions response.
pub fn extract_message_content(raw: &Value) -> Result<String, LlmError> {
    let choices = raw
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| LlmError::Malformed("response missing 'choices' array".to_string()))?;

    let first = choices.first().ok_or(LlmError::EmptyResponse)?;

    first
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(LlmError::EmptyResponse)
}
