use anyhow::Result;
use std::sync::Arc;

use travelbuddy::config::Config;
use travelbuddy::gemini::GeminiClient;
use travelbuddy::handlers::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::load());

    let generator = Arc::new(GeminiClient::new(
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
    ));

    let state = AppState::new(Arc::clone(&config), generator);
    let app = router(state);

    let bind = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind).await?;

    tracing::info!(
        %bind,
        model = %config.gemini.model,
        dialect = %config.prompts.dialect,
        "Starting TravelBuddy HTTP server"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
