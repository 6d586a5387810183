pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::sentiment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
