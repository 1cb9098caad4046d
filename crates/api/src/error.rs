use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use expense_core::error::CoreError;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for failures originating in this tier and implements
/// [`IntoResponse`] so every error renders as a failure envelope. Backend
/// rejections never pass through here -- proxy handlers translate those via
/// [`crate::response::proxy_response`] so the backend's own status and
/// message survive.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `expense_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(Envelope::fail(message))).into_response()
    }
}
