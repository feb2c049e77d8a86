// src/companion/types.rs
// Conversation and emotion types exchanged with the hosting UI

use serde::{Deserialize, Serialize};

use crate::llm::{EmotionAnalysis, Intensity, LlmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    role: Role,
    text: String,
}

impl ConversationTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self { role, text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Classifier output uses a level; ambient detectors report a score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalIntensity {
    Level(Intensity),
    Score(f64),
}

/// Detected affect, either ambient (camera, voice) or from the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSignal {
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<SignalIntensity>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl EmotionSignal {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            intensity: None,
            keywords: Vec::new(),
        }
    }

    pub fn with_intensity(mut self, intensity: SignalIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Label exactly as reported, or `None` when empty.
    pub fn label(&self) -> Option<&str> {
        (!self.label.is_empty()).then_some(self.label.as_str())
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

impl From<EmotionAnalysis> for EmotionSignal {
    fn from(analysis: EmotionAnalysis) -> Self {
        Self {
            label: analysis.emotion,
            confidence: analysis.confidence,
            intensity: Some(SignalIntensity::Level(analysis.intensity)),
            keywords: analysis.supportive_keywords,
        }
    }
}

/// Result of a remote call that never fails from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The call failed; `value` is the predetermined substitute.
    Fallback { value: T, cause: LlmError },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn cause(&self) -> Option<&LlmError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Fallback { cause, .. } => Some(cause),
        }
    }
}
