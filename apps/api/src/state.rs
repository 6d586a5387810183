use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The completion client is initialized once at startup and never mutated.
/// Carried as `Arc<dyn CompletionClient>` so tests can substitute a stub.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
}
