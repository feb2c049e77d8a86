// src/companion/responder.rs

use std::sync::Arc;

use tracing::{debug, warn};

use super::fallback::fallback_reply;
use super::types::{ConversationTurn, EmotionSignal, Outcome};
use crate::config::GenerationPolicy;
use crate::llm::{complete_within, CompletionRequest, LlmError, LlmProvider};
use crate::persona::PersonaOverlay;
use crate::prompt::build_reply_messages;

/// Produces supportive replies; falls back to a canned reply keyed on emotion.
#[derive(Clone)]
pub struct ResponseGenerator {
    provider: Arc<dyn LlmProvider>,
    policy: GenerationPolicy,
    persona: PersonaOverlay,
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            policy: GenerationPolicy::default(),
            persona: PersonaOverlay::default(),
        }
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// The outbound request for a reply. Depends only on the arguments and the policy.
    pub fn build_request(
        &self,
        current_message: &str,
        emotion: Option<&EmotionSignal>,
        history: &[ConversationTurn],
    ) -> CompletionRequest {
        let messages = build_reply_messages(
            self.persona,
            emotion,
            history,
            self.policy.history_window,
            current_message,
        );

        CompletionRequest::new(messages)
            .with_max_tokens(self.policy.max_tokens)
            .with_temperature(self.policy.temperature)
    }

    /// Reply text; always succeeds from the caller's point of view.
    pub async fn generate(
        &self,
        current_message: &str,
        emotion: Option<&EmotionSignal>,
        history: &[ConversationTurn],
    ) -> String {
        self.generate_outcome(current_message, emotion, history)
            .await
            .into_value()
    }

    pub async fn generate_outcome(
        &self,
        current_message: &str,
        emotion: Option<&EmotionSignal>,
        history: &[ConversationTurn],
    ) -> Outcome<String> {
        let request = self.build_request(current_message, emotion, history);

        match self.request_reply(&request).await {
            Ok(reply) => {
                debug!("Generated reply ({} chars)", reply.len());
                Outcome::Success(reply)
            }
            Err(cause) => {
                let label = emotion.and_then(EmotionSignal::label);
                warn!(
                    "Reply generation failed ({}), using fallback for emotion {:?}: {}",
                    cause.kind(),
                    label.unwrap_or("default"),
                    cause
                );
                Outcome::Fallback {
                    value: fallback_reply(label).to_string(),
                    cause,
                }
            }
        }
    }

    async fn request_reply(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let content =
            complete_within(self.provider.as_ref(), request, self.policy.request_timeout).await?;

        let reply = content.trim();
        if reply.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(reply.to_string())
    }
}
