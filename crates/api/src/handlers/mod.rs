//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `heroes_db` and map errors via
//! [`AppError`]. Mutating handlers own their transaction: they begin it,
//! commit once, and roll back on any store error.

pub mod hero;
pub mod hero_power;
pub mod home;
pub mod power;

use sqlx::{Sqlite, Transaction};

use crate::error::AppError;

/// Roll back `tx` after a failed write and wrap the original error.
///
/// A failure of the rollback itself is only logged; the caller sees the
/// error that caused it.
pub(crate) async fn rollback(tx: Transaction<'_, Sqlite>, err: sqlx::Error) -> AppError {
    if let Err(rollback_err) = tx.rollback().await {
        tracing::error!(error = %rollback_err, "Rollback failed");
    }
    AppError::Persistence(err)
}
