use std::collections::HashMap;

use genalpha_core::dictionary::{Dictionary, LoadError, SearchOptions};
use genalpha_core::preprocess::{DefaultPreprocessor, Preprocessor};
use genalpha_types::VocabularyEntry;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VocabularyJson {
    entries: Vec<VocabularyEntry>,
}

/// The slang vocabulary table with case-insensitive indices
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    term_index: HashMap<String, usize>,
    meaning_index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Build indices over `entries`. On duplicate keys the first entry wins.
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        let mut term_index = HashMap::new();
        let mut meaning_index = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            term_index
                .entry(DefaultPreprocessor.match_key(&entry.term))
                .or_insert(idx);
            meaning_index
                .entry(DefaultPreprocessor.match_key(&entry.meaning))
                .or_insert(idx);
        }

        Self {
            entries,
            term_index,
            meaning_index,
        }
    }

    /// Load from `{"entries": [...]}`
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: VocabularyJson = serde_json::from_str(json_str)?;
        Ok(Self::from_entries(data.entries))
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another vocabulary into this one
    /// Entries whose term matches an existing one replace it in place
    pub fn merge(self, other: Vocabulary) -> Self {
        let mut entries = self.entries;
        let mut positions: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (DefaultPreprocessor.match_key(&e.term), idx))
            .collect();

        for entry in other.entries {
            let key = DefaultPreprocessor.match_key(&entry.term);
            match positions.get(&key) {
                Some(&idx) => entries[idx] = entry,
                None => {
                    positions.insert(key, entries.len());
                    entries.push(entry);
                }
            }
        }

        Self::from_entries(entries)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for Vocabulary {
    fn lookup_term(&self, query: &str) -> Option<&VocabularyEntry> {
        self.term_index
            .get(&DefaultPreprocessor.match_key(query))
            .and_then(|&idx| self.entries.get(idx))
    }

    fn lookup_meaning(&self, query: &str) -> Option<&VocabularyEntry> {
        self.meaning_index
            .get(&DefaultPreprocessor.match_key(query))
            .and_then(|&idx| self.entries.get(idx))
    }

    fn search(&self, query: &str, options: SearchOptions) -> Vec<&VocabularyEntry> {
        let lowered = DefaultPreprocessor.match_key(query);
        let limit = options.max_results.unwrap_or(usize::MAX);

        if lowered.is_empty() {
            return self.entries.iter().take(limit).collect();
        }

        let matches = |field: &str| options.match_type.matches(&field.to_lowercase(), &lowered);

        self.entries
            .iter()
            .filter(|e| matches(&e.term) || matches(&e.meaning) || e.tags.iter().any(|t| matches(t)))
            .take(limit)
            .collect()
    }
}
