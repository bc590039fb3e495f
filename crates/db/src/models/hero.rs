//! Hero entity model and the hero-with-powers read shape.

use heroes_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A hero row from the `heroes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub name: String,
    pub super_name: String,
}

/// DTO for inserting a hero (seeding only).
#[derive(Debug, Clone)]
pub struct CreateHero {
    pub name: String,
    pub super_name: String,
}

/// A hero plus a derived `powers` list, serialized as
/// `{id, name, super_name, powers: [...]}`.
///
/// `P` is the per-power shape: `HeroPowerDetail` for the hero detail view,
/// `Power` after creating an association.
#[derive(Debug, Clone, Serialize)]
pub struct HeroWithPowers<P: Serialize> {
    #[serde(flatten)]
    pub hero: Hero,
    pub powers: Vec<P>,
}
