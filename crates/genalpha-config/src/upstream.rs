use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-5-nano".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

/// Values the proxy falls back to for fields a request leaves out
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl UpstreamConfig {
    pub fn new() -> Self {
        let api_url = env::var("LLM_DEFAULT_API_URL").unwrap_or_else(|_| default_api_url());

        let model = env::var("LLM_DEFAULT_MODEL").unwrap_or_else(|_| default_model());

        let temperature = env::var("LLM_DEFAULT_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_temperature);

        Self {
            api_url,
            model,
            temperature,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}
