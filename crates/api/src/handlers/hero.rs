//! Handlers for the `/heroes` resource.

use axum::extract::State;
use axum::Json;
use heroes_core::error::CoreError;
use heroes_core::types::DbId;
use heroes_db::models::hero::{Hero, HeroWithPowers};
use heroes_db::models::hero_power::HeroPowerDetail;
use heroes_db::repositories::{HeroPowerRepo, HeroRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /heroes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Hero>>> {
    let heroes = HeroRepo::list(&state.pool).await?;
    Ok(Json(heroes))
}

/// GET /heroes/{id}
///
/// `powers` is re-read from `hero_powers` on every call: one entry per link,
/// carrying the link's id and strength plus the power's name and description.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<HeroWithPowers<HeroPowerDetail>>> {
    let hero = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Hero", id }))?;
    let powers = HeroPowerRepo::list_details_by_hero(&state.pool, hero.id).await?;
    Ok(Json(HeroWithPowers { hero, powers }))
}
