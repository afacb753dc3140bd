use std::path::Path;

use genalpha_core::dictionary::LoadError;

use crate::dictionary::Vocabulary;

pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Load embedded vocabulary data
    pub fn load_embedded() -> Result<Vocabulary, LoadError> {
        let json = include_str!("../data/vocabulary.json");
        tracing::info!("Loading embedded slang vocabulary...");
        let vocab = Vocabulary::from_json(json)?;
        tracing::info!("Loaded {} vocabulary entries", vocab.entry_count());
        Ok(vocab)
    }

    /// Load vocabulary from file path
    pub fn load_from_file(path: &Path) -> Result<Vocabulary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading vocabulary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let vocab = Vocabulary::from_json(&json)?;
        tracing::info!("Loaded {} vocabulary entries from file", vocab.entry_count());
        Ok(vocab)
    }

    /// Embedded table plus any extra files; files that fail to load are skipped
    pub fn load_with_additional(additional_paths: &[String]) -> Vocabulary {
        let mut vocab = Self::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded vocabulary: {}", e);
            tracing::warn!("Starting with empty vocabulary");
            Vocabulary::new()
        });

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional vocabulary from: {}", path);
                    vocab = vocab.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load vocabulary from {}: {}", path, e);
                }
            }
        }

        vocab
    }
}
