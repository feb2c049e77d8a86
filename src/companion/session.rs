// src/companion/session.rs
// In-memory chat flow: classify when no ambient signal is known, then reply

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::classifier::EmotionClassifier;
use super::responder::ResponseGenerator;
use super::types::{ConversationTurn, EmotionSignal};
use crate::config::GenerationPolicy;
use crate::llm::LlmProvider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Trimmed user message, rejecting one with nothing left to send.
pub fn validate_message(message: &str) -> Result<&str, SessionError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(SessionError::EmptyMessage);
    }
    Ok(message)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanionReply {
    pub text: String,
    /// Signal the reply was conditioned on.
    pub emotion: EmotionSignal,
    pub fell_back: bool,
}

pub struct CompanionSession {
    generator: ResponseGenerator,
    classifier: EmotionClassifier,
    history: Vec<ConversationTurn>,
    ambient: Option<EmotionSignal>,
}

impl CompanionSession {
    pub fn new(provider: Arc<dyn LlmProvider>, policy: GenerationPolicy) -> Self {
        let classifier =
            EmotionClassifier::new(provider.clone()).with_timeout(policy.request_timeout);
        let generator = ResponseGenerator::new(provider).with_policy(policy);
        Self::from_parts(generator, classifier)
    }

    pub fn from_parts(generator: ResponseGenerator, classifier: EmotionClassifier) -> Self {
        Self {
            generator,
            classifier,
            history: Vec::new(),
            ambient: None,
        }
    }

    /// Signal from an external detector; suppresses classification while set.
    pub fn set_ambient_emotion(&mut self, signal: EmotionSignal) {
        self.ambient = Some(signal);
    }

    pub fn clear_ambient_emotion(&mut self) {
        self.ambient = None;
    }

    pub fn ambient_emotion(&self) -> Option<&EmotionSignal> {
        self.ambient.as_ref()
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn reset(&mut self) {
        info!("Resetting companion session ({} turns dropped)", self.history.len());
        self.history.clear();
    }

    pub async fn send(&mut self, message: &str) -> Result<CompanionReply, SessionError> {
        let message = validate_message(message)?;

        let emotion = match &self.ambient {
            Some(signal) => signal.clone(),
            None => {
                let outcome = self.classifier.classify_outcome(message).await;
                if outcome.is_fallback() {
                    debug!("Continuing with neutral emotion context");
                }
                EmotionSignal::from(outcome.into_value())
            }
        };

        let outcome = self
            .generator
            .generate_outcome(message, Some(&emotion), &self.history)
            .await;
        let fell_back = outcome.is_fallback();
        let text = outcome.into_value();

        self.history.push(ConversationTurn::user(message));
        self.history.push(ConversationTurn::assistant(text.clone()));

        // Turns older than the context window are never sent again.
        let window = self.generator.policy().history_window;
        let excess = self.history.len().saturating_sub(window);
        self.history.drain(..excess);

        Ok(CompanionReply {
            text,
            emotion,
            fell_back,
        })
    }
}
