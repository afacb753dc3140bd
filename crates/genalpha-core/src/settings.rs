//! Save, clear and inspect the locally stored LLM settings.

use genalpha_config::{SettingsStore, StoreError, keys};

use crate::sanitize::sanitize_api_key;

/// Values as typed by the user, before cleanup
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Please provide model, temperature, and API key first.")]
    Incomplete,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What is stored, without revealing the key itself
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSummary {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<String>,
    pub key_length: usize,
    pub key_has_sk_prefix: bool,
}

/// Persist the form. The key is always stored sanitized.
///
/// Returns the sanitized key.
pub fn save(store: &dyn SettingsStore, form: &SettingsForm) -> Result<String, SettingsError> {
    let api_key = sanitize_api_key(Some(&form.api_key));
    let model = form.model.trim();
    let temperature = form.temperature.trim();

    if api_key.is_empty() || model.is_empty() || temperature.is_empty() {
        return Err(SettingsError::Incomplete);
    }

    store.set(keys::API_KEY, &api_key)?;
    store.set(keys::API_URL, form.api_url.trim())?;
    store.set(keys::MODEL, model)?;
    store.set(keys::TEMPERATURE, temperature)?;

    tracing::info!(key_length = api_key.len(), "Saved LLM settings");
    Ok(api_key)
}

/// Remove all LLM settings; translation falls back to mock mode
pub fn clear(store: &dyn SettingsStore) -> Result<(), StoreError> {
    for key in keys::LLM_KEYS {
        store.remove(key)?;
    }
    tracing::info!("Cleared LLM settings");
    Ok(())
}

pub fn summary(store: &dyn SettingsStore) -> SettingsSummary {
    let non_empty = |key: &str| store.get(key).filter(|v| !v.is_empty());
    let key = sanitize_api_key(store.get(keys::API_KEY).as_deref());

    SettingsSummary {
        api_url: non_empty(keys::API_URL),
        model: non_empty(keys::MODEL),
        temperature: non_empty(keys::TEMPERATURE),
        key_length: key.len(),
        key_has_sk_prefix: key.starts_with("sk-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genalpha_config::MemoryStore;

    fn form(api_key: &str) -> SettingsForm {
        SettingsForm {
            api_key: api_key.to_string(),
            api_url: "  https://llm.example/v1/chat/completions ".to_string(),
            model: " gpt-5-nano ".to_string(),
            temperature: " 1 ".to_string(),
        }
    }

    #[test]
    fn test_save_stores_sanitized_key() {
        let store = MemoryStore::new();

        let saved = save(&store, &form("Bearer \"sk-ABC 123\"")).unwrap();

        assert_eq!(saved, "sk-ABC123");
        assert_eq!(store.get(keys::API_KEY).as_deref(), Some("sk-ABC123"));
        assert_eq!(
            store.get(keys::API_URL).as_deref(),
            Some("https://llm.example/v1/chat/completions")
        );
        assert_eq!(store.get(keys::MODEL).as_deref(), Some("gpt-5-nano"));
        assert_eq!(store.get(keys::TEMPERATURE).as_deref(), Some("1"));
    }

    #[test]
    fn test_save_requires_key_model_and_temperature() {
        let store = MemoryStore::new();

        assert!(matches!(
            save(&store, &form("   ")),
            Err(SettingsError::Incomplete)
        ));

        let mut missing_model = form("sk-1");
        missing_model.model = " ".to_string();
        assert!(matches!(
            save(&store, &missing_model),
            Err(SettingsError::Incomplete)
        ));

        assert_eq!(store.get(keys::API_KEY), None);
    }

    #[test]
    fn test_clear_then_summary() {
        let store = MemoryStore::new();
        save(&store, &form("sk-proj-xyz")).unwrap();

        let before = summary(&store);
        assert_eq!(before.key_length, "sk-proj-xyz".len());
        assert!(before.key_has_sk_prefix);
        assert_eq!(before.model.as_deref(), Some("gpt-5-nano"));

        clear(&store).unwrap();

        let after = summary(&store);
        assert_eq!(after.key_length, 0);
        assert!(!after.key_has_sk_prefix);
        assert_eq!(after.api_url, None);
        assert_eq!(after.model, None);
        assert_eq!(after.temperature, None);
    }
}
