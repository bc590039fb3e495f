//! HeroPower join entity model and DTOs.

use heroes_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hero_powers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct HeroPower {
    pub id: DbId,
    pub strength: String,
    pub hero_id: DbId,
    pub power_id: DbId,
}

/// DTO for inserting a hero-power link. Built from a request body that
/// already passed `heroes_core::hero_power::validate`.
#[derive(Debug, Clone)]
pub struct CreateHeroPower {
    pub strength: String,
    pub hero_id: DbId,
    pub power_id: DbId,
}

/// A hero-power link joined to its power: `id` and `strength` come from
/// the link, `name` and `description` from the power.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct HeroPowerDetail {
    pub id: DbId,
    pub strength: String,
    pub name: String,
    pub description: String,
}
