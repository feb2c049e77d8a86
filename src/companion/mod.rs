// src/companion/mod.rs
// AI companion adapters: reply generation, emotion classification, chat session

pub mod classifier;
pub mod fallback;
pub mod responder;
pub mod session;
pub mod types;

pub use classifier::EmotionClassifier;
pub use fallback::{fallback_reply, neutral_analysis};
pub use responder::ResponseGenerator;
pub use session::{validate_message, CompanionReply, CompanionSession, SessionError};
pub use types::{ConversationTurn, EmotionSignal, Outcome, Role, SignalIntensity};
