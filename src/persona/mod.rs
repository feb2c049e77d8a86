// src/persona/mod.rs
// Persona overlays for the companion. Only the default overlay exists today.

pub mod default;

pub use default::{DEFAULT_PERSONA_PROMPT, EMOTION_ANALYST_PROMPT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersonaOverlay {
    #[default]
    Default, // empathetic, non-diagnostic companion
}

impl PersonaOverlay {
    /// Returns the system prompt directive for this overlay.
    pub fn prompt(&self) -> &'static str {
        match self {
            PersonaOverlay::Default => DEFAULT_PERSONA_PROMPT,
        }
    }
}
