//! Repository for the `heroes` table.

use heroes_core::types::DbId;
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

use crate::models::hero::{CreateHero, Hero};

const COLUMNS: &str = "id, name, super_name";

pub struct HeroRepo;

impl HeroRepo {
    /// Insert a new hero, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateHero,
    ) -> Result<Hero, sqlx::Error> {
        let query = format!(
            "INSERT INTO heroes (name, super_name) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(&input.name)
            .bind(&input.super_name)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Hero>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM heroes WHERE id = ?1");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all heroes ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM heroes ORDER BY id");
        sqlx::query_as::<_, Hero>(&query).fetch_all(pool).await
    }

    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM heroes")
            .fetch_one(executor)
            .await
    }
}
