use std::sync::Arc;

use anyhow::Context;
use genalpha_config::{Config, JsonFileStore, SettingsStore};
use genalpha_core::History;
use genalpha_lang_slang::{MockTranslator, Vocabulary, VocabularyLoader};
use genalpha_translator::TranslationClient;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SettingsStore>,
    pub vocabulary: Arc<Vocabulary>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let settings_path = config.settings_path();
        let store = JsonFileStore::open(&settings_path)
            .with_context(|| format!("failed to open settings at {}", settings_path.display()))?;

        let vocabulary = VocabularyLoader::load_with_additional(&config.vocabulary.additional_paths);

        Ok(Self {
            config,
            store: Arc::new(store),
            vocabulary: Arc::new(vocabulary),
        })
    }

    pub fn history(&self) -> History {
        History::new(Arc::clone(&self.store))
    }

    /// Client wired to the configured proxy, the vocabulary fallback and history
    pub fn translation_client(&self) -> TranslationClient {
        let fallback = MockTranslator::new(Arc::clone(&self.vocabulary));
        TranslationClient::new(
            self.config.network.proxy_url.clone(),
            Arc::clone(&self.store),
            self.config.llm_defaults.clone(),
            Arc::new(fallback),
        )
        .with_history(self.history())
    }
}
