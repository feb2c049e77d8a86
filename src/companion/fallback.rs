// src/companion/fallback.rs
// Fixed substitutes used when the remote service cannot be reached

use crate::llm::{EmotionAnalysis, Intensity};

pub const ANXIOUS_FALLBACK: &str = "I can sense you're feeling anxious right now. That's completely understandable. Try taking slow, deep breaths - in for 4 counts, hold for 4, out for 4. Would you like to talk about what's making you feel this way?";

pub const SAD_FALLBACK: &str = "I can hear the sadness in your words, and I want you to know that it's okay to feel this way. Your feelings are valid. Sometimes it helps to express these feelings rather than keeping them bottled up. I'm here to listen.";

pub const STRESSED_FALLBACK: &str = "I can sense the stress you're experiencing. Stress is your body's natural response to challenging situations. Let's break this down - what are the main sources of stress in your life right now?";

pub const HAPPY_FALLBACK: &str = "It's wonderful to hear the positivity in your message! These moments of joy are so important for our overall well-being. What's been bringing you happiness lately?";

pub const DEFAULT_FALLBACK: &str = "Thank you for sharing that with me. I'm here to listen and support you through whatever you're experiencing. Your feelings and thoughts are valid, and this is a safe space for you to express them.";

/// Reply for a failed generation, keyed on the exact emotion label.
pub fn fallback_reply(label: Option<&str>) -> &'static str {
    match label {
        Some("anxious") => ANXIOUS_FALLBACK,
        Some("sad") => SAD_FALLBACK,
        Some("stressed") => STRESSED_FALLBACK,
        Some("happy") => HAPPY_FALLBACK,
        _ => DEFAULT_FALLBACK,
    }
}

/// Analysis reported when classification fails.
pub fn neutral_analysis() -> EmotionAnalysis {
    EmotionAnalysis {
        emotion: "neutral".to_string(),
        confidence: 0.5,
        intensity: Intensity::Medium,
        supportive_keywords: Vec::new(),
    }
}
