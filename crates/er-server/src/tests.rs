use crate::*;
use crate::routes::SAMPLE_TEXTS;
use crate::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use er_core::ServerConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    post_raw(&body.to_string())
}

fn post_raw(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ========== Health & Status ==========

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_status() {
    let (status, body) = send(app(), get("/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["api_status"], "active");
    assert_eq!(body["endpoints"]["analyze"], "/analyze");
    assert!(body["uptime_secs"].is_number());
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = send(app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

// ========== Analyze ==========

#[tokio::test]
async fn test_analyze_anxious() {
    let text = "I feel nervous about my first job interview";
    let (status, body) = send(app(), post_json(json!({ "text": text }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "anxious");
    assert_eq!(body["text_length"], 43);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    assert!(body["processed_at"].as_f64().unwrap() > 0.0);
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.1..=0.95).contains(&confidence));
    assert_eq!((confidence * 100.0).round() / 100.0, confidence);
}

#[tokio::test]
async fn test_analyze_neutral_fallback_suggestion() {
    let (status, body) = send(app(), post_json(json!({ "text": "The quick brown fox jumps" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "neutral");
    assert_eq!(body["suggestions"], json!(["Take time to reflect on your feelings"]));
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.3..=0.6).contains(&confidence));
}

#[tokio::test]
async fn test_analyze_max_length_accepted() {
    let text = "a".repeat(1000);
    let (status, body) = send(app(), post_json(json!({ "text": text }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text_length"], 1000);
}

#[tokio::test(start_paused = true)]
async fn test_analyze_with_delay() {
    let config = ServerConfig { analyze_delay_ms: 1500, ..ServerConfig::default() };
    let app = app_with_state(AppState::new(config));
    let (status, body) = send(app, post_json(json!({ "text": "I feel sad and lonely today" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "sad");
}

// ========== Validation ==========

async fn assert_rejected(req: Request<Body>, code: &str) {
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected {code}");
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_reject_missing_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .body(Body::from(r#"{"text":"hello there"}"#))
        .unwrap();
    assert_rejected(req, "no_data").await;
}

#[tokio::test]
async fn test_reject_malformed_json() {
    assert_rejected(post_raw("{not json"), "no_data").await;
}

#[tokio::test]
async fn test_reject_empty_object() {
    assert_rejected(post_json(json!({})), "no_data").await;
}

#[tokio::test]
async fn test_reject_non_object() {
    assert_rejected(post_json(json!(["text"])), "no_data").await;
}

#[tokio::test]
async fn test_reject_missing_text() {
    assert_rejected(post_json(json!({ "message": "hello" })), "missing_text").await;
}

#[tokio::test]
async fn test_reject_non_string_text() {
    assert_rejected(post_json(json!({ "text": 42 })), "invalid_text").await;
}

#[tokio::test]
async fn test_reject_short_text() {
    assert_rejected(post_json(json!({ "text": "  hi  " })), "text_too_short").await;
}

#[tokio::test]
async fn test_reject_long_text() {
    assert_rejected(post_json(json!({ "text": "a".repeat(1001) })), "text_too_long").await;
}

// ========== Emotions, Suggestions, Self-test ==========

#[tokio::test]
async fn test_emotions() {
    let (status, body) = send(app(), get("/emotions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 10);
    let list = body["available_emotions"].as_array().unwrap();
    assert_eq!(list[0], "happy");
    assert_eq!(list[9], "peaceful");
    assert!(!list.contains(&json!("neutral")));
}

#[tokio::test]
async fn test_suggestions_curated() {
    let (status, body) = send(app(), get("/suggestions/Anxious")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "anxious");
    assert_eq!(body["suggestions"][0], "Try deep breathing exercises");
}

#[tokio::test]
async fn test_suggestions_neutral() {
    let (status, body) = send(app(), get("/suggestions/neutral")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_suggestions_unknown_category() {
    let (status, body) = send(app(), get("/suggestions/bored")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unknown_category");
}

#[tokio::test]
async fn test_self_test() {
    let (status, body) = send(app(), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analyzer_status"], "working");
    let results = body["test_results"].as_array().unwrap();
    assert_eq!(results.len(), SAMPLE_TEXTS.len());
    let emotions: Vec<&str> = results.iter().map(|r| r["emotion"].as_str().unwrap()).collect();
    assert_eq!(emotions, vec!["anxious", "excited", "sad", "angry"]);
}

// ========== CORS ==========

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/analyze")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_cors_unknown_origin() {
    let req = Request::builder()
        .uri("/")
        .header("origin", "http://evil.test")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_configured_origin() {
    let config = ServerConfig { cors_origins: vec!["http://app.test".into()], ..ServerConfig::default() };
    let req = Request::builder()
        .uri("/")
        .header("origin", "http://app.test")
        .body(Body::empty())
        .unwrap();
    let resp = app_with_state(AppState::new(config)).oneshot(req).await.unwrap();
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "http://app.test");
}

// ========== Errors ==========

#[test]
fn test_api_error_from_config_error() {
    let err: error::ApiError = er_core::ErError::Config("bad".into()).into();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code, "internal_error");
}
