use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message for the root path.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Sentiment Analyzer API is running"
    }))
}

/// GET /health
/// Fixed status payload, independent of provider availability.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "sentiment-analyzer"
    }))
}
