// src/llm/structured/validator.rs

use super::types::EmotionAnalysis;
use crate::llm::error::LlmError;

/// Checks the constraints serde cannot express.
pub fn validate_analysis(analysis: &EmotionAnalysis) -> Result<(), LlmError> {
    if !(0.0..=1.0).contains(&analysis.confidence) {
        return Err(LlmError::Schema(format!(
            "confidence {} outside [0, 1]",
            analysis.confidence
        )));
    }

    Ok(())
}

/// Parse a structured emotion analysis and validate it against the schema.
pub fn parse_analysis(content: &str) -> Result<EmotionAnalysis, LlmError> {
    let analysis: EmotionAnalysis = serde_json::from_str(content.trim())?;
    validate_analysis(&analysis)?;
    Ok(analysis)
}
