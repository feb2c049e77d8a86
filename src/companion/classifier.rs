// src/companion/classifier.rs

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::fallback::neutral_analysis;
use super::types::Outcome;
use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::llm::schema::emotion_analysis_response_format;
use crate::llm::{complete_within, parse_analysis, CompletionRequest, EmotionAnalysis, LlmProvider};
use crate::prompt::build_analysis_messages;

/// Labels the emotional tone of free text; falls back to a neutral analysis.
#[derive(Clone)]
pub struct EmotionClassifier {
    provider: Arc<dyn LlmProvider>,
    request_timeout: Duration,
}

impl EmotionClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn build_request(&self, text: &str) -> CompletionRequest {
        CompletionRequest::new(build_analysis_messages(text))
            .with_response_format(emotion_analysis_response_format())
    }

    /// Emotion analysis; always succeeds from the caller's point of view.
    pub async fn classify(&self, text: &str) -> EmotionAnalysis {
        self.classify_outcome(text).await.into_value()
    }

    pub async fn classify_outcome(&self, text: &str) -> Outcome<EmotionAnalysis> {
        let request = self.build_request(text);

        let result = complete_within(self.provider.as_ref(), &request, self.request_timeout)
            .await
            .and_then(|content| parse_analysis(&content));

        match result {
            Ok(analysis) => {
                debug!(
                    "Classified text as {} ({:.2}, {})",
                    analysis.emotion, analysis.confidence, analysis.intensity
                );
                Outcome::Success(analysis)
            }
            Err(cause) => {
                warn!("Emotion analysis failed ({}), reporting neutral: {}", cause.kind(), cause);
                Outcome::Fallback {
                    value: neutral_analysis(),
                    cause,
                }
            }
        }
    }
}
