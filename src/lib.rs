// src/lib.rs

pub mod companion;
pub mod config;
pub mod llm;
pub mod persona;
pub mod prompt;

pub use companion::{
    CompanionReply, CompanionSession, ConversationTurn, EmotionClassifier, EmotionSignal,
    Outcome, ResponseGenerator, Role,
};
pub use config::{CompanionConfig, GenerationPolicy, CONFIG};
pub use llm::{EmotionAnalysis, Intensity, LlmError, LlmProvider};
