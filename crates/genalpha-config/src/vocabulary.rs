use std::env;
use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Extra vocabulary files merged over the embedded table
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct VocabularyConfig {
    pub additional_paths: Vec<String>,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        let additional_paths = env::var_os("GENALPHA_VOCABULARY_PATHS")
            .map(|raw| split_paths(&raw))
            .unwrap_or_default();

        Self { additional_paths }
    }
}

fn split_paths(raw: &OsStr) -> Vec<String> {
    env::split_paths(raw)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .collect()
}
