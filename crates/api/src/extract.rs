//! Extractor wrappers whose rejections render as [`AppError`] envelopes
//! instead of axum's plain-text defaults.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// JSON object body deserialized into `T`.
///
/// The body must be a JSON object. Arrays and scalars are rejected even when
/// `T` could be built from them positionally. Malformed bodies are reported
/// as `{"errors": [...]}` 400.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(object) = axum::Json::<Map<String, Value>>::from_request(req, state).await?;
        serde_json::from_value(Value::Object(object))
            .map(AppJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
    }
}

/// `axum::extract::Path` with unparseable segments reported as 404.
///
/// A path like `/heroes/abc` names a resource that cannot exist, so it is
/// answered the same way as an unknown id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected path parameters");
        AppError::NoRoute
    }
}
