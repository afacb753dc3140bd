use genalpha_types::TranslationDirection;

pub mod chat;
pub mod client;
pub mod prompt;
pub mod task;

pub use client::TranslationClient;
pub use task::TranslationTask;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` in the given direction
    async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub direction: TranslationDirection,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The proxy answered with a non-success status
    #[error("{}: translation request failed{}", status_label(.status), body_suffix(.body))]
    UpstreamStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Translation cancelled")]
    Cancelled,

    #[error("Translation task failed: {0}")]
    TaskFailed(String),
}

/// `Unauthorized` for 401, `HTTP <status>` otherwise
pub fn status_label(status: &u16) -> String {
    if *status == 401 {
        "Unauthorized".to_string()
    } else {
        format!("HTTP {status}")
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {body}")
    }
}
