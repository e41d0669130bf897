//! Test fixtures and helpers for integration testing

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use courtside::config::AppConfig;
use courtside::service::{build_router, AppState};
use courtside::types::MatchPolicy;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a router backed by a fresh empty roster
pub fn create_test_router() -> Router {
    let state = AppState::new(AppConfig::default()).expect("failed to build app state");
    build_router(state)
}

/// Build a router whose config uses the given default match policy
pub fn create_test_router_with_policy(policy: MatchPolicy) -> Router {
    let mut config = AppConfig::default();
    config.matchmaking.default_policy = policy;
    let state = AppState::new(config).expect("failed to build app state");
    build_router(state)
}

/// Stats payload with every field set to the same value
pub fn uniform_stats(value: f64) -> Value {
    json!({
        "experience": value,
        "competition_level": value,
        "height": value,
        "weight": value,
        "wingspan": value,
        "shooting": value,
        "dribbling": value,
        "speed": value,
        "agility": value
    })
}

/// Signup payload for a named player with uniform stats
pub fn signup_payload(name: &str, value: f64) -> Value {
    let mut body = uniform_stats(value);
    body["name"] = json!(name);
    body
}

/// POST a JSON body and decode the JSON response
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = serde_json::from_slice(&bytes).expect("response was not JSON");
    (status, value)
}

/// GET a path and decode the JSON response
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = serde_json::from_slice(&bytes).expect("response was not JSON");
    (status, value)
}

/// GET a path and return the raw body as text
pub async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let text = String::from_utf8(bytes.to_vec()).expect("response was not UTF-8");
    (status, text)
}
