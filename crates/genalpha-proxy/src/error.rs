use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing API key.")]
    MissingApiKey,

    #[error("Method not allowed.")]
    MethodNotAllowed,

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Proxy server error: {0}")]
    ServerError(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedBody(_) | Self::Upstream(_) | Self::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the caller. Internal faults never expose their details.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "Missing API key.",
            Self::MethodNotAllowed => "Method not allowed.",
            Self::MalformedBody(_) | Self::Upstream(_) | Self::ServerError(_) => "Proxy error.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "translate request failed");
        } else {
            tracing::debug!(status = status.as_u16(), "translate request rejected");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
