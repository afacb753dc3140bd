use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::llm::EnvDefaults;
use self::network::NetworkConfig;
use self::upstream::UpstreamConfig;
use self::vocabulary::VocabularyConfig;

pub mod keys;
pub mod llm;
pub mod network;
pub mod store;
pub mod upstream;
pub mod vocabulary;

pub use llm::LlmConfig;
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    /// Fixed defaults the proxy applies when a request leaves a field out
    pub upstream: UpstreamConfig,
    /// Environment-level defaults for the translation client
    pub llm_defaults: EnvDefaults,
    pub vocabulary: VocabularyConfig,

    /// Directory holding the persisted settings file
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        let data_dir = env::var("GENALPHA_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".genalpha"));

        Config {
            network: NetworkConfig::new(),
            upstream: UpstreamConfig::new(),
            llm_defaults: EnvDefaults::from_env(),
            vocabulary: VocabularyConfig::new(),

            data_dir,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
