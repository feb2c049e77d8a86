// src/llm/schema.rs
// JSON schema for the emotion-analysis structured output

use serde_json::{json, Value};

pub const EMOTION_ANALYSIS_SCHEMA_NAME: &str = "emotion_analysis";

/// Returns the JSON schema an emotion analysis must satisfy
pub fn emotion_analysis_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "emotion": { "type": "string" },
            "confidence": { "type": "number", "minimum": 0, "maximum": 1 },
            "intensity": { "type": "string", "enum": ["low", "medium", "high"] },
            "supportive_keywords": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["emotion", "confidence", "intensity", "supportive_keywords"],
        "additionalProperties": false
    })
}

/// `response_format` value asking the service for schema-constrained output
pub fn emotion_analysis_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": EMOTION_ANALYSIS_SCHEMA_NAME,
            "schema": emotion_analysis_schema()
        }
    })
}
