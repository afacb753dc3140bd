use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use genalpha_config::upstream::UpstreamConfig;
use genalpha_translator::chat::ChatCompletionRequest;
use genalpha_translator::prompt::build_messages;
use genalpha_types::TranslationDirection;
use serde::Deserialize;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::error::ProxyError;

/// Body of `POST /api/translate` as the relay reads it
///
/// `direction` is kept raw: only the exact string `alpha-to-english` selects
/// the slang-to-English template. Anything else, or nothing, selects the
/// English-to-slang one and the request is still forwarded.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RelayRequest {
    api_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    direction: Option<Value>,
    text: Option<String>,
    temperature: Option<f64>,
}

impl RelayRequest {
    fn prompt_direction(&self) -> TranslationDirection {
        match self.direction.as_ref().and_then(Value::as_str) {
            Some("alpha-to-english") => TranslationDirection::AlphaToEnglish,
            _ => TranslationDirection::EnglishToAlpha,
        }
    }
}

struct ProxyState {
    client: reqwest::Client,
    upstream: UpstreamConfig,
}

pub struct ProxyServer {
    client: reqwest::Client,
    upstream: UpstreamConfig,
}

impl ProxyServer {
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn router(&self) -> Router {
        let state = Arc::new(ProxyState {
            client: self.client.clone(),
            upstream: self.upstream.clone(),
        });
        Router::new()
            .route(
                "/api/translate",
                post(translate_handler).fallback(method_not_allowed),
            )
            .route("/health", get(health_handler))
            .with_state(state)
    }

    /// Serve on `addr` (`host:port`) until `shutdown` resolves
    pub async fn start<F>(&self, addr: &str, shutdown: F) -> Result<(), ProxyError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ProxyError::ServerError(format!("failed to bind {addr}: {e}")))?;

        tracing::info!("Proxy listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ProxyError::ServerError(e.to_string()))?;

        tracing::info!("Proxy stopped");
        Ok(())
    }
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}

/// An empty body or a JSON `null` reads as a request with every field absent
fn parse_request(body: &[u8]) -> Result<RelayRequest, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RelayRequest::default());
    }
    let request: Option<RelayRequest> = serde_json::from_slice(body)?;
    Ok(request.unwrap_or_default())
}

async fn translate_handler(
    State(state): State<Arc<ProxyState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request = parse_request(&body)?;

    let api_key = match request.api_key.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => return Err(ProxyError::MissingApiKey),
    };

    let direction = request.prompt_direction();
    let api_url = request
        .api_url
        .as_deref()
        .unwrap_or(state.upstream.api_url.as_str());

    let payload = ChatCompletionRequest {
        model: request
            .model
            .clone()
            .unwrap_or_else(|| state.upstream.model.clone()),
        temperature: request.temperature.unwrap_or(state.upstream.temperature),
        messages: build_messages(direction, request.text.as_deref().unwrap_or("")),
    };

    tracing::info!(
        %direction,
        model = %payload.model,
        api_url,
        "Forwarding translation request"
    );

    let upstream = state
        .client
        .post(api_url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = upstream.bytes().await?;

    tracing::info!(status = status.as_u16(), "Upstream responded");

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
