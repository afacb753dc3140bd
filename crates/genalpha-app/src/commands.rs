//! CLI commands

use clap::{Parser, Subcommand, ValueEnum};
use genalpha_core::dictionary::MatchType;
use genalpha_lang_slang::quiz::QUIZ_LENGTH;
use genalpha_types::TranslationDirection;

/// Gen Alpha slang translator
#[derive(Parser, Debug)]
#[command(name = "genalpha")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit logs as JSON (also enabled by LOG_FORMAT=json)
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the translation proxy
    Serve {
        /// Bind host (defaults to HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (defaults to PORT or 3000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Translate text, through the proxy when an API key is configured
    Translate {
        /// Text to translate
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,

        /// alpha-to-english or english-to-alpha
        #[arg(short, long, default_value_t = TranslationDirection::AlphaToEnglish)]
        direction: TranslationDirection,
    },

    /// Locally stored LLM settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Translation history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Search the slang vocabulary
    Dictionary {
        /// Search text; lists every entry when omitted
        query: Option<String>,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// How the query has to match
        #[arg(long = "match", value_enum, default_value = "contains")]
        match_type: MatchArg,
    },

    /// Multiple-choice quiz on slang meanings
    Quiz {
        /// Number of questions
        #[arg(short = 'n', long, default_value_t = QUIZ_LENGTH)]
        questions: usize,
    },

    /// Flip through random flashcards
    Flashcards,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show what is stored (the key itself is never printed)
    Show,

    /// Save the API key, endpoint, model and temperature
    Save {
        #[arg(long)]
        api_key: String,

        /// Chat-completion endpoint; the proxy default is used when empty
        #[arg(long, default_value = "")]
        api_url: String,

        #[arg(long, default_value = "gpt-5-nano")]
        model: String,

        #[arg(long)]
        temperature: String,
    },

    /// Remove every stored LLM setting
    Clear,

    /// Send a test translation with the stored settings
    Test,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List entries, most recent first
    List,

    /// Delete one entry
    Delete {
        /// Entry id as shown by `history list`
        id: String,
    },

    /// Delete every entry
    Clear,

    /// Show the most recent translation
    Resume,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchArg {
    Exact,
    Prefix,
    Suffix,
    Contains,
}

impl From<MatchArg> for MatchType {
    fn from(value: MatchArg) -> Self {
        match value {
            MatchArg::Exact => MatchType::Exact,
            MatchArg::Prefix => MatchType::Prefix,
            MatchArg::Suffix => MatchType::Suffix,
            MatchArg::Contains => MatchType::Contains,
        }
    }
}
