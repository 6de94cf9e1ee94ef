use axum::Json;
use axum::extract::State;
use chrono::{Local, Utc};

use super::AppState;
use crate::error::{Result, TravelBuddyError};
use crate::models::{TransportMetadata, TransportRequest, TransportResponse};
use crate::{prompts, transit};

/// `POST /api/transport`: fabricate mock routes relative to now, compose the
/// comparison prompt, make the single upstream call, return the simplified
/// text alongside the raw data.
pub async fn transport(
    State(state): State<AppState>,
    Json(request): Json<TransportRequest>,
) -> Result<Json<TransportResponse>> {
    let origin = require_field(request.origin, "origin")?;
    let destination = require_field(request.destination, "destination")?;

    // Preferences are accepted for contract compatibility but not enforced;
    // the mock data source has nothing to sort.
    if request.preferences.is_some() {
        tracing::debug!("Ignoring transport preferences on mock data");
    }

    if !state.config.gemini.is_api_key_configured() {
        return Err(TravelBuddyError::Config(
            "Gemini API key not configured".to_string(),
        ));
    }

    let routes = transit::mock_routes(&origin, &destination, Local::now());
    let alerts = transit::service_alerts();
    let routes_data = transit::format_routes(&routes);
    let prompt = prompts::transport_prompt(&origin, &destination, &routes_data);

    tracing::info!(%origin, %destination, route_count = routes.len(), "Comparing transport routes");

    let simplified_text = state.generator.generate(&prompt).await?;

    let metadata = TransportMetadata {
        origin,
        destination,
        timestamp: Utc::now(),
        route_count: routes.len(),
    };

    Ok(Json(TransportResponse {
        success: true,
        simplified_text,
        raw_routes: routes,
        service_alerts: alerts,
        metadata,
    }))
}

fn require_field(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TravelBuddyError::validation(field, "is required")),
    }
}
