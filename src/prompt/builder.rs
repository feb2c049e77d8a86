use crate::companion::{ConversationTurn, EmotionSignal, Role};
use crate::llm::ChatMessage;
use crate::persona::{PersonaOverlay, EMOTION_ANALYST_PROMPT};

/// The trailing `window` turns, in chronological order
pub fn recent_window(history: &[ConversationTurn], window: usize) -> &[ConversationTurn] {
    let start_idx = history.len().saturating_sub(window);
    &history[start_idx..]
}

/// "Current emotion detected" line appended to the persona directive
pub fn emotion_context_line(emotion: Option<&EmotionSignal>) -> String {
    let label = emotion.and_then(EmotionSignal::label).unwrap_or("unknown");
    let percent = emotion.map(EmotionSignal::confidence_percent).unwrap_or(0);

    format!("Current emotion detected: {} (confidence: {}%)", label, percent)
}

/// Builds the system prompt: persona directive followed by the emotion context
pub fn build_system_prompt(persona: PersonaOverlay, emotion: Option<&EmotionSignal>) -> String {
    let mut prompt = String::new();
    prompt.push_str(persona.prompt());
    prompt.push_str("\n\n");
    prompt.push_str(&emotion_context_line(emotion));
    prompt
}

/// Full message list for a reply: system prompt, windowed history, current message
pub fn build_reply_messages(
    persona: PersonaOverlay,
    emotion: Option<&EmotionSignal>,
    history: &[ConversationTurn],
    window: usize,
    current_message: &str,
) -> Vec<ChatMessage> {
    let recent = recent_window(history, window);

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(build_system_prompt(persona, emotion)));

    for turn in recent {
        messages.push(match turn.role() {
            Role::User => ChatMessage::user(turn.text()),
            Role::Assistant => ChatMessage::assistant(turn.text()),
        });
    }

    messages.push(ChatMessage::user(current_message));
    messages
}

/// Message list for an emotion analysis of `text`
pub fn build_analysis_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(EMOTION_ANALYST_PROMPT),
        ChatMessage::user(format!(
            "Analyze the emotional content of this text: \"{}\"",
            text
        )),
    ]
}
