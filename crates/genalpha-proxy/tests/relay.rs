use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use genalpha_config::upstream::UpstreamConfig;
use genalpha_proxy::ProxyServer;
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct FakeUpstream {
    captured: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
    body: &'static str,
}

async fn fake_completions(
    State(fake): State<FakeUpstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    fake.captured
        .lock()
        .unwrap()
        .push(Captured { authorization, body });
    (fake.status, fake.body)
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn start_upstream(
    status: StatusCode,
    body: &'static str,
) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeUpstream {
        captured: captured.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completions))
        .with_state(fake);
    let base = serve(app).await;
    (format!("{}/v1/chat/completions", base), captured)
}

async fn start_proxy(default_api_url: &str) -> String {
    let upstream = UpstreamConfig {
        api_url: default_api_url.to_string(),
        model: "gpt-5-nano".to_string(),
        temperature: 0.2,
    };
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    let server = ProxyServer::new(upstream).with_http_client(http);
    let base = serve(server.router()).await;
    format!("{}/api/translate", base)
}

const COMPLETION: &str = r#"{"choices":[{"message":{"role":"assistant","content":"charm"}}]}"#;

#[tokio::test]
async fn test_missing_key_never_reaches_upstream() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    let proxy = start_proxy(&upstream_url).await;
    let client = reqwest::Client::new();

    for body in [json!({"apiKey": ""}), json!({"text": "rizz"})] {
        let resp = client.post(&proxy).json(&body).send().await.unwrap();
        assert_eq!(resp.status(), 400);
        let json: Value = resp.json().await.unwrap();
        assert_eq!(json, json!({"error": "Missing API key."}));
    }

    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_status_and_body_pass_through() {
    let error_body = r#"{"error":{"message":"Incorrect API key provided","code":"invalid_api_key"}}"#;
    let (upstream_url, _captured) = start_upstream(StatusCode::UNAUTHORIZED, error_body).await;
    let proxy = start_proxy(&upstream_url).await;

    let resp = reqwest::Client::new()
        .post(&proxy)
        .json(&json!({"apiKey": "sk-bad", "direction": "alpha-to-english", "text": "rizz"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(resp.text().await.unwrap(), error_body);
}

#[tokio::test]
async fn test_request_shaping_with_defaults() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    let proxy = start_proxy(&upstream_url).await;

    let resp = reqwest::Client::new()
        .post(&proxy)
        .json(&json!({"apiKey": "sk-live", "text": "very good"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), COMPLETION);

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].authorization.as_deref(), Some("Bearer sk-live"));

    let body = &captured[0].body;
    assert_eq!(body["model"], "gpt-5-nano");
    assert_eq!(body["temperature"], 0.2);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(
        body["messages"][0]["content"],
        "You are a translator for Gen Alpha slang. Return only the translated text without quotes or extra commentary."
    );
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        "Translate this English sentence into Gen Alpha slang: very good"
    );
}

#[tokio::test]
async fn test_direction_selects_template() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    let proxy = start_proxy(&upstream_url).await;
    let client = reqwest::Client::new();

    for direction in ["alpha-to-english", "sideways"] {
        let resp = client
            .post(&proxy)
            .json(&json!({"apiKey": "sk-live", "direction": direction, "text": "rizz"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), COMPLETION);
    }

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(
        captured[0].body["messages"][1]["content"],
        "Translate this Gen Alpha slang to plain English: rizz"
    );
    // unrecognised directions are still relayed
    assert_eq!(
        captured[1].body["messages"][1]["content"],
        "Translate this English sentence into Gen Alpha slang: rizz"
    );
}

#[tokio::test]
async fn test_request_fields_override_defaults() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    // Default points nowhere; the request names the real upstream.
    let proxy = start_proxy("http://127.0.0.1:9/unused").await;

    let resp = reqwest::Client::new()
        .post(&proxy)
        .json(&json!({
            "apiUrl": upstream_url,
            "apiKey": "sk-live",
            "model": "gpt-4o-mini",
            "temperature": 0.9,
            "direction": "english-to-alpha",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let captured = captured.lock().unwrap();
    let body = &captured[0].body;
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["temperature"], 0.9);
    assert_eq!(
        body["messages"][1]["content"],
        "Translate this English sentence into Gen Alpha slang: "
    );
}

#[tokio::test]
async fn test_non_post_is_rejected() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    let proxy = start_proxy(&upstream_url).await;

    let resp = reqwest::Client::new().get(&proxy).send().await.unwrap();

    assert_eq!(resp.status(), 405);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({"error": "Method not allowed."}));
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_proxy_error() {
    let (upstream_url, captured) = start_upstream(StatusCode::OK, COMPLETION).await;
    let proxy = start_proxy(&upstream_url).await;

    let resp = reqwest::Client::new()
        .post(&proxy)
        .header("content-type", "application/json")
        .body("{\"apiKey\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({"error": "Proxy error."}));
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_is_proxy_error() {
    let proxy = start_proxy("http://127.0.0.1:9/v1/chat/completions").await;

    let resp = reqwest::Client::new()
        .post(&proxy)
        .json(&json!({"apiKey": "sk-live", "text": "rizz"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({"error": "Proxy error."}));
}

#[tokio::test]
async fn test_health() {
    let proxy = start_proxy("http://127.0.0.1:9/unused").await;
    let health = proxy.replace("/api/translate", "/health");

    let resp = reqwest::get(&health).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}
