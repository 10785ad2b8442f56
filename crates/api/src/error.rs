use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use surveyforge_core::error::TemplateError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`TemplateError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `surveyforge_core`.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// A body that fails JSON extraction is a validation failure, not a 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- TemplateError variants ---
            AppError::Template(domain) => match domain {
                TemplateError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", domain.to_string())
                }
                TemplateError::InvalidState(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_STATE", domain.to_string())
                }
                TemplateError::EmptyTemplate => (
                    StatusCode::BAD_REQUEST,
                    "EMPTY_TEMPLATE",
                    domain.to_string(),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
