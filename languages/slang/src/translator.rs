use std::sync::Arc;

use async_trait::async_trait;
use genalpha_core::dictionary::Dictionary;
use genalpha_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use genalpha_types::TranslationDirection;

use crate::dictionary::Vocabulary;

pub const NO_MATCH_ALPHA_TO_ENGLISH: &str = "No direct match. Try the dictionary for more context.";
pub const NO_MATCH_ENGLISH_TO_ALPHA: &str = "No direct match. Try describing it another way.";

/// Offline translator: exact vocabulary lookup, no network
#[derive(Clone)]
pub struct MockTranslator {
    vocabulary: Arc<Vocabulary>,
}

impl MockTranslator {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Meaning for a term, or term for a meaning; a fixed hint on a miss
    pub fn mock_translate(&self, text: &str, direction: TranslationDirection) -> String {
        match direction {
            TranslationDirection::AlphaToEnglish => self
                .vocabulary
                .lookup_term(text)
                .map(|e| e.meaning.clone())
                .unwrap_or_else(|| NO_MATCH_ALPHA_TO_ENGLISH.to_string()),
            TranslationDirection::EnglishToAlpha => self
                .vocabulary
                .lookup_meaning(text)
                .map(|e| e.term.clone())
                .unwrap_or_else(|| NO_MATCH_ENGLISH_TO_ALPHA.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: self.mock_translate(text, direction),
            direction,
            provider: self.metadata().name,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mock".to_string(),
        }
    }
}
