use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use er_analyzer::suggestions_for;
use er_core::EmotionCategory;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Accepted input length in characters; the lower bound applies after trimming.
pub const MIN_TEXT_CHARS: usize = 3;
pub const MAX_TEXT_CHARS: usize = 1000;

/// Canned inputs run by `/test`.
pub const SAMPLE_TEXTS: [&str; 4] = [
    "I feel nervous about my first job interview",
    "I am so excited about my vacation",
    "I feel sad and lonely today",
    "I am really angry about this situation",
];

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/status", get(status))
}

pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/emotions", get(list_emotions))
        .route("/suggestions/{emotion}", get(suggestions))
        .route("/test", get(self_test))
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub emotion: EmotionCategory,
    pub confidence: f64,
    pub suggestions: &'static [&'static str],
    pub text_length: usize,
    pub processed_at: f64,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Emotion Reflection API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "api_status": "active",
        "uptime_secs": state.uptime_secs(),
        "endpoints": {
            "analyze": "/analyze",
            "emotions": "/emotions",
            "health": "/",
            "status": "/status",
            "suggestions": "/suggestions/{emotion}",
            "test": "/test",
        }
    }))
}

/// Pull a usable `text` out of the request body.
fn extract_text(payload: Result<Json<Value>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::bad_request("no_data", format!("Please provide JSON data with 'text' field ({rejection})"))
    })?;

    let fields = body
        .as_object()
        .filter(|o| !o.is_empty())
        .ok_or_else(|| ApiError::bad_request("no_data", "Please provide JSON data with 'text' field"))?;

    let text = fields
        .get("text")
        .ok_or_else(|| ApiError::bad_request("missing_text", "Please provide 'text' field in JSON data"))?
        .as_str()
        .ok_or_else(|| ApiError::bad_request("invalid_text", "Text must be a string"))?;

    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(ApiError::bad_request(
            "text_too_short",
            format!("Please provide at least {MIN_TEXT_CHARS} characters"),
        ));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::bad_request(
            "text_too_long",
            format!("Please limit text to {MAX_TEXT_CHARS} characters"),
        ));
    }

    Ok(text.to_string())
}

fn unix_seconds() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = extract_text(payload).inspect_err(|e| warn!(code = e.code, "rejected analyze request"))?;

    if state.config.analyze_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.analyze_delay_ms)).await;
    }

    let result = state.analyzer.analyze(&text);
    let text_length = text.chars().count();
    info!(emotion = %result.category, confidence = result.confidence, text_length, "analyzed text");

    Ok(Json(AnalyzeResponse {
        emotion: result.category,
        confidence: result.confidence,
        suggestions: suggestions_for(result.category),
        text_length,
        processed_at: unix_seconds(),
    }))
}

async fn list_emotions(State(state): State<AppState>) -> Json<Value> {
    let emotions = state.analyzer.categories();
    Json(json!({
        "available_emotions": emotions,
        "total_count": emotions.len(),
    }))
}

async fn suggestions(Path(emotion): Path<String>) -> Result<Json<Value>, ApiError> {
    let category: EmotionCategory = emotion.parse()?;
    Ok(Json(json!({
        "emotion": category,
        "suggestions": suggestions_for(category),
    })))
}

async fn self_test(State(state): State<AppState>) -> Json<Value> {
    let results: Vec<Value> = SAMPLE_TEXTS
        .iter()
        .map(|text| {
            let r = state.analyzer.analyze(text);
            json!({ "text": text, "emotion": r.category, "confidence": r.confidence })
        })
        .collect();
    Json(json!({
        "test_results": results,
        "analyzer_status": "working",
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("The requested endpoint does not exist")
}
