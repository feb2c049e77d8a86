// src/llm/structured/mod.rs
// Structured (schema-constrained) responses and their local validation

pub mod types;
pub mod validator;

pub use types::*;
pub use validator::*;
