use std::sync::Arc;

use async_trait::async_trait;
use genalpha_config::llm::EnvDefaults;
use genalpha_config::{LlmConfig, SettingsStore};
use genalpha_core::History;
use genalpha_core::preprocess::{DefaultPreprocessor, Preprocessor};
use genalpha_core::sanitize_api_key;
use genalpha_types::{TranslateRequest, TranslationDirection};
use tokio_util::sync::CancellationToken;

use crate::chat::ChatCompletionResponse;
use crate::task::TranslationTask;
use crate::{ProviderMetadata, TranslateError, Translation, Translator};

pub const CHECK_TEXT: &str = "rizz";
const CHECK_TEMPERATURE: f64 = 0.2;

/// Translates through the local proxy, falling back to a local translator
/// when no API key is configured or the reply carries no text.
pub struct TranslationClient {
    http: reqwest::Client,
    proxy_url: String,
    store: Arc<dyn SettingsStore>,
    defaults: EnvDefaults,
    fallback: Arc<dyn Translator>,
    history: Option<History>,
}

impl TranslationClient {
    pub fn new(
        proxy_url: impl Into<String>,
        store: Arc<dyn SettingsStore>,
        defaults: EnvDefaults,
        fallback: Arc<dyn Translator>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            proxy_url: proxy_url.into(),
            store,
            defaults,
            fallback,
            history: None,
        }
    }

    /// Record every successful translation into `history`
    pub fn with_history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Translate and return only the text
    pub async fn translate_text(
        &self,
        input: &str,
        direction: TranslationDirection,
    ) -> Result<String, TranslateError> {
        Ok(self.translate(input, direction).await?.text)
    }

    /// Run a translation as a task the caller can cancel
    pub fn spawn(
        self: &Arc<Self>,
        input: impl Into<String>,
        direction: TranslationDirection,
    ) -> TranslationTask {
        let client = Arc::clone(self);
        let input = input.into();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(TranslateError::Cancelled),
                result = client.translate(&input, direction) => result,
            }
        });

        TranslationTask::new(handle, cancel)
    }

    /// Send a fixed translation through the proxy to check the stored settings.
    /// Nothing is recorded and no fallback applies.
    pub async fn check_settings(&self) -> Result<(), TranslateError> {
        let config = LlmConfig::resolve(self.store.as_ref(), &self.defaults);
        let request = TranslateRequest {
            api_url: config.api_url,
            api_key: Some(sanitize_api_key(config.api_key.as_deref())),
            model: config.model,
            direction: Some(TranslationDirection::AlphaToEnglish),
            text: Some(CHECK_TEXT.to_string()),
            temperature: Some(config.temperature.unwrap_or(CHECK_TEMPERATURE)),
        };

        self.post(&request).await?;
        tracing::info!("Settings check succeeded");
        Ok(())
    }

    async fn request_live(
        &self,
        text: &str,
        direction: TranslationDirection,
        config: LlmConfig,
        api_key: String,
    ) -> Result<Option<String>, TranslateError> {
        let request = TranslateRequest {
            api_url: config.api_url,
            api_key: Some(api_key),
            model: config.model,
            direction: Some(direction),
            text: Some(text.to_string()),
            temperature: config.temperature,
        };

        tracing::debug!(
            %direction,
            model = ?request.model,
            proxy = %self.proxy_url,
            "Sending translation request"
        );

        let body = self.post(&request).await?;
        match serde_json::from_str::<ChatCompletionResponse>(&body) {
            Ok(parsed) => Ok(parsed.first_content()),
            Err(e) => {
                tracing::warn!("Unreadable chat completion response: {}", e);
                Ok(None)
            }
        }
    }

    /// POST to the proxy; the body of a success response, `UpstreamStatus` otherwise
    async fn post(&self, request: &TranslateRequest) -> Result<String, TranslateError> {
        let response = self.http.post(&self.proxy_url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Translation request rejected");
            return Err(TranslateError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    fn record(&self, translation: &Translation, input: &str) {
        let Some(history) = &self.history else {
            return;
        };
        if let Err(e) = history.record(translation.direction, input, &translation.text) {
            tracing::warn!("Failed to save translation history: {}", e);
        }
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(
        &self,
        input: &str,
        direction: TranslationDirection,
    ) -> Result<Translation, TranslateError> {
        let text = DefaultPreprocessor.process(input);
        if text.is_empty() {
            return Ok(Translation {
                text: String::new(),
                direction,
                provider: "none".to_string(),
            });
        }

        let config = LlmConfig::resolve(self.store.as_ref(), &self.defaults);
        let api_key = sanitize_api_key(config.api_key.as_deref());

        let translation = if api_key.is_empty() {
            tracing::debug!("No API key configured, using {}", self.fallback.metadata().name);
            self.fallback.translate(&text, direction).await?
        } else {
            match self.request_live(&text, direction, config, api_key).await? {
                Some(content) => Translation {
                    text: content,
                    direction,
                    provider: self.metadata().name,
                },
                None => {
                    tracing::info!("Empty translation from LLM, falling back");
                    self.fallback.translate(&text, direction).await?
                }
            }
        };

        self.record(&translation, &text);
        Ok(translation)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "llm-proxy".to_string(),
        }
    }
}
