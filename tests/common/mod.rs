// tests/common/mod.rs
// Recording mock provider shared by the integration tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mindcare::llm::{CompletionRequest, LlmError, LlmProvider};

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

pub struct MockProvider {
    responder: Responder,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn with<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with(move |_| Ok(text.clone()))
    }

    pub fn failing(error: LlmError) -> Self {
        Self::with(move |_| Err(error.clone()))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// Never answers within any reasonable test timeout.
pub struct StalledProvider;

#[async_trait]
impl LlmProvider for StalledProvider {
    fn name(&self) -> &'static str {
        "stalled"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        tokio::time::sleep(Duration::from_secs(300)).await;
        Ok("unreachable".to_string())
    }
}

pub const HOPELESS_ANALYSIS: &str = r#"{"emotion":"sad","confidence":0.87,"intensity":"high","supportive_keywords":["hopeless","exhausted"]}"#;
