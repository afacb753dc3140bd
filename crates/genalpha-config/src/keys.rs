//! Keys used in the persistent settings store.

pub const API_KEY: &str = "genalpha.llm.apiKey";
pub const API_URL: &str = "genalpha.llm.apiUrl";
pub const MODEL: &str = "genalpha.llm.model";
pub const TEMPERATURE: &str = "genalpha.llm.temperature";

/// JSON array of history entries, most recent first
pub const HISTORY: &str = "genalpha.translator.history";

/// The four LLM settings, in display order
pub const LLM_KEYS: [&str; 4] = [API_URL, MODEL, TEMPERATURE, API_KEY];
