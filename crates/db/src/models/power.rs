//! Power entity model and DTOs.

use heroes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A power row from the `powers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Power {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for inserting a power (seeding only; the API never creates powers).
#[derive(Debug, Clone)]
pub struct CreatePower {
    pub name: String,
    pub description: String,
}

/// DTO for `PATCH /powers/{id}`. An absent or `null` description keeps the
/// current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePower {
    pub description: Option<String>,
}
