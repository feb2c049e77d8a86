// src/prompt/mod.rs
// Prompt assembly for reply generation and emotion analysis

pub mod builder;

pub use builder::{
    build_analysis_messages,
    build_reply_messages,
    build_system_prompt,
    emotion_context_line,
    recent_window,
};
