use genalpha_types::TranslationDirection;

use crate::chat::ChatMessage;

pub const SYSTEM_PROMPT: &str = "You are a translator for Gen Alpha slang. Return only the translated text without quotes or extra commentary.";

pub fn user_prompt(direction: TranslationDirection, text: &str) -> String {
    match direction {
        TranslationDirection::AlphaToEnglish => {
            format!("Translate this Gen Alpha slang to plain English: {text}")
        }
        TranslationDirection::EnglishToAlpha => {
            format!("Translate this English sentence into Gen Alpha slang: {text}")
        }
    }
}

/// System instruction followed by the direction-specific user message
pub fn build_messages(direction: TranslationDirection, text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(direction, text)),
    ]
}
