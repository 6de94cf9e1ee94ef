use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TravelBuddyError>;

#[derive(Error, Debug)]
pub enum TravelBuddyError {
    #[error("Validation error for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TravelBuddyError {
    pub fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// JSON error body returned to clients.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for TravelBuddyError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            TravelBuddyError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: format!("Missing or invalid field '{field}': {reason}"),
                    details: None,
                },
            ),
            TravelBuddyError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: msg.clone(),
                    details: None,
                },
            ),
            TravelBuddyError::Upstream(detail) => {
                // Detail stays in the server log; callers only see a generic
                // message.
                tracing::error!("Upstream generation failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Failed to generate a response. Please try again.".to_string(),
                        details: None,
                    },
                )
            }
            other => {
                tracing::error!("Internal error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
