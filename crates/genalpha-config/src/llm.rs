use std::env;

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::store::SettingsStore;

/// Environment-level fallbacks for the LLM settings
///
/// Consulted only for fields the settings store has no value for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvDefaults {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<String>,
}

impl EnvDefaults {
    pub fn from_env() -> Self {
        Self {
            api_url: env_value("LLM_API_URL"),
            api_key: env_value("LLM_API_KEY"),
            model: env_value("LLM_MODEL"),
            temperature: env_value("LLM_TEMPERATURE"),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().and_then(present)
}

fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Resolved LLM settings for one translation attempt
///
/// `api_key` is carried as found; the client sanitizes it before use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
}

impl LlmConfig {
    /// Take each field from the store, else from `defaults`.
    ///
    /// Empty stored values count as absent. Temperature only resolves when it
    /// parses as a finite number.
    pub fn resolve(store: &dyn SettingsStore, defaults: &EnvDefaults) -> Self {
        let pick = |key: &str, fallback: &Option<String>| {
            store
                .get(key)
                .and_then(present)
                .or_else(|| fallback.clone().and_then(present))
        };

        let temperature = pick(keys::TEMPERATURE, &defaults.temperature)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite());

        Self {
            api_url: pick(keys::API_URL, &defaults.api_url).map(|v| v.trim().to_string()),
            api_key: pick(keys::API_KEY, &defaults.api_key),
            model: pick(keys::MODEL, &defaults.model).map(|v| v.trim().to_string()),
            temperature,
        }
    }
}
