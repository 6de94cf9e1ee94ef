pub mod simplify;
pub mod transport;

use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::config::Config;
use crate::gemini::TextGenerator;
use crate::prompts::PromptCategory;

/// Shared per-process state. Nothing here is mutable; concurrent requests are
/// fully independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: Arc<Config>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/simplify", post(simplify::simplify))
        .route("/api/transport", post(transport::transport))
        .route("/api/prompt-types", get(prompt_types))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

/// Category keys exposed for front-end template pickers.
async fn prompt_types() -> Json<Vec<&'static str>> {
    Json(
        PromptCategory::ALL
            .iter()
            .map(|category| category.key())
            .collect(),
    )
}
