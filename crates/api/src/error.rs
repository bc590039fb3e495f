use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use heroes_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the JSON error envelopes:
///
/// - 404 / 408: `{"error": "<message>"}`
/// - 400: `{"errors": ["<message>"]}`
/// - 500: `{"error": "An internal error occurred"}`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `heroes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error outside of a write, e.g. a failed read.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error raised while writing. The transaction has already
    /// been rolled back when this is constructed.
    #[error("{0}")]
    Persistence(sqlx::Error),

    /// A malformed request body or parameter.
    #[error("{0}")]
    BadRequest(String),

    /// No route or resource matches the request.
    #[error("Not found")]
    NoRoute,

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found(core.to_string())
                }
                CoreError::Validation(msg) => bad_request(msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::Persistence(err) => {
                tracing::warn!(error = %err, "Write failed and was rolled back");
                bad_request(err.to_string())
            }
            AppError::BadRequest(msg) => bad_request(msg.clone()),
            AppError::NoRoute => not_found(self.to_string()),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                axum::Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, axum::Json(json!({ "error": message }))).into_response()
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "errors": [message] })),
    )
        .into_response()
}

fn internal() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": INTERNAL_MESSAGE })),
    )
        .into_response()
}
