//! Handlers for the `/hero_powers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use heroes_core::error::CoreError;
use heroes_core::hero_power::{self, HeroPowerInput, REFERENCE_NOT_FOUND};
use heroes_db::models::hero::HeroWithPowers;
use heroes_db::models::hero_power::CreateHeroPower;
use heroes_db::models::power::Power;
use heroes_db::repositories::{HeroPowerRepo, HeroRepo, PowerRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::rollback;
use crate::state::AppState;

/// POST /hero_powers
///
/// Links a hero to a power at a given strength and returns the hero with
/// its distinct powers. Presence of all three fields is checked first, then
/// existence of the hero and power; both failures are 400 and nothing is
/// written.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<HeroPowerInput>,
) -> AppResult<(StatusCode, Json<HeroWithPowers<Power>>)> {
    let checked = hero_power::validate(&input)?;
    let (hero_id, power_id) = checked.references()?;

    let mut tx = state.pool.begin().await.map_err(AppError::Persistence)?;

    let hero = match HeroRepo::find_by_id(&mut *tx, hero_id).await {
        Ok(hero) => hero,
        Err(err) => return Err(rollback(tx, err).await),
    };
    let power_exists = match PowerRepo::find_by_id(&mut *tx, power_id).await {
        Ok(power) => power.is_some(),
        Err(err) => return Err(rollback(tx, err).await),
    };
    let Some(hero) = hero.filter(|_| power_exists) else {
        if let Err(err) = tx.rollback().await {
            tracing::error!(error = %err, "Rollback failed");
        }
        return Err(CoreError::Validation(REFERENCE_NOT_FOUND.into()).into());
    };

    let input = CreateHeroPower {
        strength: checked.strength,
        hero_id,
        power_id,
    };
    let link = match HeroPowerRepo::create(&mut tx, &input).await {
        Ok(link) => link,
        Err(err) => return Err(rollback(tx, err).await),
    };
    tx.commit().await.map_err(AppError::Persistence)?;
    tracing::info!(
        hero_power_id = link.id,
        hero_id,
        power_id,
        strength = %link.strength,
        "Created hero power"
    );

    let powers = PowerRepo::list_by_hero(&state.pool, hero.id).await?;
    Ok((StatusCode::CREATED, Json(HeroWithPowers { hero, powers })))
}
