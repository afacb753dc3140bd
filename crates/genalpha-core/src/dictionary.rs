use genalpha_types::VocabularyEntry;

/// Vocabulary lookup operations
pub trait Dictionary: Send + Sync {
    /// Case-insensitive exact match against `term`
    fn lookup_term(&self, query: &str) -> Option<&VocabularyEntry>;

    /// Case-insensitive exact match against `meaning`
    fn lookup_meaning(&self, query: &str) -> Option<&VocabularyEntry>;

    /// Search term, meaning and tags, in table order
    fn search(&self, query: &str, options: SearchOptions) -> Vec<&VocabularyEntry>;
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// `None` returns every match
    pub max_results: Option<usize>,
    pub match_type: MatchType,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            match_type: MatchType::Contains,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Exact,
    Prefix,
    Suffix,
    Contains,
}

impl MatchType {
    /// Both sides are expected to be lower-cased already
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        match self {
            MatchType::Exact => candidate == query,
            MatchType::Prefix => candidate.starts_with(query),
            MatchType::Suffix => candidate.ends_with(query),
            MatchType::Contains => candidate.contains(query),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
