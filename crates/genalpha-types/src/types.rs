use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which way a translation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationDirection {
    /// Slang in, plain English out
    #[default]
    AlphaToEnglish,
    /// Plain English in, slang out
    EnglishToAlpha,
}

impl TranslationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlphaToEnglish => "alpha-to-english",
            Self::EnglishToAlpha => "english-to-alpha",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::AlphaToEnglish => "Gen Alpha → English",
            Self::EnglishToAlpha => "English → Gen Alpha",
        }
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha-to-english" => Ok(Self::AlphaToEnglish),
            "english-to-alpha" => Ok(Self::EnglishToAlpha),
            other => Err(format!(
                "unknown direction '{other}' (expected alpha-to-english or english-to-alpha)"
            )),
        }
    }
}

/// One row of the slang vocabulary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub meaning: String,
    pub example: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A completed translation kept in the persisted history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub direction: TranslationDirection,
    pub input: String,
    pub output: String,
    /// RFC 3339 / ISO-8601
    pub timestamp: String,
}

/// Body accepted by `POST /api/translate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<TranslationDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}
