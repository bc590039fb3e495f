//! Repository for the `powers` table.

use heroes_core::types::DbId;
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

use crate::models::power::{CreatePower, Power};

const COLUMNS: &str = "id, name, description";

pub struct PowerRepo;

impl PowerRepo {
    /// Insert a new power, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreatePower,
    ) -> Result<Power, sqlx::Error> {
        let query = format!(
            "INSERT INTO powers (name, description) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Power>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Power>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM powers WHERE id = ?1");
        sqlx::query_as::<_, Power>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all powers ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Power>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM powers ORDER BY id");
        sqlx::query_as::<_, Power>(&query).fetch_all(pool).await
    }

    /// Distinct powers linked to a hero through `hero_powers`, ordered by id.
    pub async fn list_by_hero<'e, E>(executor: E, hero_id: DbId) -> Result<Vec<Power>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Power>(
            "SELECT DISTINCT p.id, p.name, p.description
             FROM powers p
             JOIN hero_powers hp ON hp.power_id = p.id
             WHERE hp.hero_id = ?1
             ORDER BY p.id",
        )
        .bind(hero_id)
        .fetch_all(executor)
        .await
    }

    /// Set the description of a power. `None` keeps the current value.
    ///
    /// Runs on the caller's connection so it can be part of a transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_description(
        conn: &mut SqliteConnection,
        id: DbId,
        description: Option<&str>,
    ) -> Result<Option<Power>, sqlx::Error> {
        let query = format!(
            "UPDATE powers SET description = COALESCE(?2, description)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Power>(&query)
            .bind(id)
            .bind(description)
            .fetch_optional(conn)
            .await
    }
}
