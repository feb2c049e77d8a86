// src/llm/mod.rs
// LLM module exports and submodule declarations

pub mod error;
pub mod provider;
pub mod schema;
pub mod structured;

pub use error::LlmError;
pub use provider::openai::OpenAiProvider;
pub use provider::{complete_within, ChatMessage, CompletionRequest, LlmProvider};
pub use structured::{parse_analysis, validate_analysis, EmotionAnalysis, Intensity};
