use crate::error::AppError;

/// GET / -- empty body, 200.
pub async fn index() {}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NoRoute
}
