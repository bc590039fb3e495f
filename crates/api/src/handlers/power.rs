//! Handlers for the `/powers` resource.

use axum::extract::State;
use axum::Json;
use heroes_core::error::CoreError;
use heroes_core::types::DbId;
use heroes_db::models::power::{Power, UpdatePower};
use heroes_db::repositories::PowerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::rollback;
use crate::state::AppState;

fn power_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Power",
        id,
    })
}

/// GET /powers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Power>>> {
    let powers = PowerRepo::list(&state.pool).await?;
    Ok(Json(powers))
}

/// GET /powers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Power>> {
    let power = PowerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| power_not_found(id))?;
    Ok(Json(power))
}

/// PATCH /powers/{id}
///
/// Only `description` is writable; leaving it out keeps the current value.
/// An unknown id is reported before the body is looked at. Store failures
/// roll the transaction back and come back as 400.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Result<AppJson<UpdatePower>, AppError>,
) -> AppResult<Json<Power>> {
    PowerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| power_not_found(id))?;
    let AppJson(input) = body?;

    let mut tx = state.pool.begin().await.map_err(AppError::Persistence)?;
    let updated =
        match PowerRepo::update_description(&mut tx, id, input.description.as_deref()).await {
            Ok(updated) => updated,
            Err(err) => return Err(rollback(tx, err).await),
        };
    tx.commit().await.map_err(AppError::Persistence)?;

    let power = updated.ok_or_else(|| power_not_found(id))?;
    tracing::info!(power_id = power.id, "Updated power description");
    Ok(Json(power))
}
