use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use intake_pathways::error::PathwayError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Answers that failed validation, one message per problem.
    Invalid(Vec<String>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Invalid(details) => (
                StatusCode::BAD_REQUEST,
                "answers failed validation".to_string(),
                details,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<PathwayError> for ApiError {
    fn from(e: PathwayError) -> Self {
        match e {
            PathwayError::UnknownPathway(key) => {
                ApiError::NotFound(format!("pathway not found: {key}"))
            }
            PathwayError::InvalidAnswers { errors, .. } => {
                ApiError::Invalid(errors.into_iter().map(|e| e.message).collect())
            }
            other @ PathwayError::InconsistentRegistry(_) => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<intake_core::error::CoreError> for ApiError {
    fn from(e: intake_core::error::CoreError) -> Self {
        match e {
            intake_core::error::CoreError::Incomplete => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
