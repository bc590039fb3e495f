//! Repository for the `hero_powers` join table.

use heroes_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::hero_power::{CreateHeroPower, HeroPower, HeroPowerDetail};

const COLUMNS: &str = "id, strength, hero_id, power_id";

pub struct HeroPowerRepo;

impl HeroPowerRepo {
    /// Insert a new hero-power link, returning the created row.
    ///
    /// Does not check that the hero and power exist; callers do that first
    /// on the same connection. The foreign keys still reject dangling ids.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateHeroPower,
    ) -> Result<HeroPower, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_powers (strength, hero_id, power_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, HeroPower>(&query)
            .bind(&input.strength)
            .bind(input.hero_id)
            .bind(input.power_id)
            .fetch_one(conn)
            .await?;
        tracing::debug!(
            hero_power_id = row.id,
            hero_id = row.hero_id,
            power_id = row.power_id,
            "Inserted hero power"
        );
        Ok(row)
    }

    /// Every link for a hero joined to its power, ordered by link id.
    pub async fn list_details_by_hero(
        pool: &SqlitePool,
        hero_id: DbId,
    ) -> Result<Vec<HeroPowerDetail>, sqlx::Error> {
        sqlx::query_as::<_, HeroPowerDetail>(
            "SELECT hp.id, hp.strength, p.name, p.description
             FROM hero_powers hp
             JOIN powers p ON p.id = hp.power_id
             WHERE hp.hero_id = ?1
             ORDER BY hp.id",
        )
        .bind(hero_id)
        .fetch_all(pool)
        .await
    }

    /// Total number of links.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hero_powers")
            .fetch_one(pool)
            .await
    }
}
