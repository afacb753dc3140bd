//! Translation history persisted as one JSON list in the settings store.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use genalpha_config::{SettingsStore, StoreError, keys};
use genalpha_types::{HistoryEntry, TranslationDirection};
use uuid::Uuid;

/// Most entries kept; older ones are dropped from the tail
pub const MAX_HISTORY: usize = 20;

#[derive(Clone)]
pub struct History {
    store: Arc<dyn SettingsStore>,
}

impl History {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Current list, most recent first. Unreadable data reads as empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let Some(raw) = self.store.get(keys::HISTORY) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding unreadable translation history: {}", e);
                Vec::new()
            }
        }
    }

    /// Prepend a new entry and persist the capped list
    pub fn record(
        &self,
        direction: TranslationDirection,
        input: &str,
        output: &str,
    ) -> Result<HistoryEntry, StoreError> {
        let now = Utc::now();
        let entry = HistoryEntry {
            id: format!("{}-{}", now.timestamp_millis(), Uuid::new_v4().simple()),
            direction,
            input: input.trim().to_string(),
            output: output.trim().to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut entries = self.load();
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY);
        self.persist(&entries)?;

        tracing::debug!(id = %entry.id, count = entries.len(), "Recorded translation");
        Ok(entry)
    }

    /// Remove an entry by ID. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.persist(&[])
    }

    /// The entry a resumed session starts from
    pub fn latest(&self) -> Option<HistoryEntry> {
        self.load().into_iter().next()
    }

    fn persist(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(keys::HISTORY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genalpha_config::MemoryStore;

    fn history() -> (Arc<MemoryStore>, History) {
        let store = Arc::new(MemoryStore::new());
        let history = History::new(store.clone());
        (store, history)
    }

    #[test]
    fn test_record_prepends_and_trims_text() {
        let (_, history) = history();

        history
            .record(TranslationDirection::AlphaToEnglish, " rizz ", " charm ")
            .unwrap();
        let latest = history
            .record(TranslationDirection::EnglishToAlpha, "okay", "bet")
            .unwrap();

        let entries = history.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], latest);
        assert_eq!(entries[1].input, "rizz");
        assert_eq!(entries[1].output, "charm");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_length_never_exceeds_cap() {
        let (_, history) = history();

        for i in 0..(MAX_HISTORY + 7) {
            history
                .record(TranslationDirection::AlphaToEnglish, &format!("in {i}"), "out")
                .unwrap();
            assert!(history.load().len() <= MAX_HISTORY);
        }

        let entries = history.load();
        assert_eq!(entries.len(), MAX_HISTORY);
        assert_eq!(entries[0].input, format!("in {}", MAX_HISTORY + 6));
        assert_eq!(entries[MAX_HISTORY - 1].input, "in 7");
    }

    #[test]
    fn test_remove_and_clear() {
        let (store, history) = history();

        let first = history
            .record(TranslationDirection::AlphaToEnglish, "mid", "average")
            .unwrap();
        history
            .record(TranslationDirection::AlphaToEnglish, "slay", "great")
            .unwrap();

        assert!(history.remove(&first.id).unwrap());
        assert!(!history.remove(&first.id).unwrap());
        assert_eq!(history.load().len(), 1);

        history.clear().unwrap();
        assert!(history.load().is_empty());
        assert_eq!(store.get(keys::HISTORY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_history_reads_empty() {
        let store = Arc::new(MemoryStore::with_values([(keys::HISTORY, "{oops")]));
        let history = History::new(store);

        assert!(history.load().is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let (_, history) = history();
        let entry = history
            .record(TranslationDirection::AlphaToEnglish, "ate", "did great")
            .unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
        assert!(entry.timestamp.ends_with('Z'));
    }
}
