/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cloned into each request. Cheap to clone (the
/// pool is reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: heroes_db::DbPool,
}
