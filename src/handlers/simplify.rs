use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::error::{Result, TravelBuddyError};
use crate::models::{SimplifyRequest, SimplifyResponse, reduction_percent};
use crate::prompts::{self, PromptCategory};

/// `POST /api/simplify`: validate, render the category template, make the
/// single upstream call, shape the statistics. Any failure terminates the
/// request with one error response.
pub async fn simplify(
    State(state): State<AppState>,
    Json(request): Json<SimplifyRequest>,
) -> Result<Json<SimplifyResponse>> {
    let user_input = request.user_input.unwrap_or_default();
    if user_input.trim().is_empty() {
        return Err(TravelBuddyError::validation(
            "userInput",
            "must not be empty",
        ));
    }

    if !state.config.gemini.is_api_key_configured() {
        return Err(TravelBuddyError::Config(
            "Gemini API key not configured".to_string(),
        ));
    }

    let category = PromptCategory::from_key(request.prompt_type.as_deref());
    let prompt =
        prompts::simplification_prompt(state.config.prompts.dialect, category, &user_input);

    tracing::info!(
        category = category.key(),
        input_chars = user_input.chars().count(),
        "Simplifying tourist information"
    );

    let result = state.generator.generate(&prompt).await?;

    let original_length = user_input.chars().count();
    let simplified_length = result.chars().count();
    let reduction = reduction_percent(original_length, simplified_length);

    Ok(Json(SimplifyResponse {
        result,
        original_length,
        simplified_length,
        reduction,
    }))
}
