use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::sentiment::normalizer::{analyze, AnalyzeRequest, SentimentResponse};
use crate::state::AppState;

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<SentimentResponse>, AppError> {
    let response = analyze(&req.text, state.llm.as_ref()).await?;
    Ok(Json(response))
}
