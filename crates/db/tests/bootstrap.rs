use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    heroes_db::health_check(&pool).await.unwrap();

    for table in ["heroes", "powers", "hero_powers"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign keys must be enforced so a dangling link cannot be stored.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_enforced(pool: SqlitePool) {
    let result = sqlx::query("INSERT INTO hero_powers (strength, hero_id, power_id) VALUES ('Weak', 99, 99)")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "dangling hero_powers row must be rejected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_only_runs_once(pool: SqlitePool) {
    assert!(heroes_db::seed::seed_if_empty(&pool).await.unwrap());
    assert!(!heroes_db::seed::seed_if_empty(&pool).await.unwrap());

    let heroes: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM heroes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(heroes.0, 10);

    let links: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hero_powers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links.0, 6);
}
