pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{hero, hero_power, home, power};
use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// GET    /                  -> empty 200
/// GET    /heroes            -> list heroes
/// GET    /heroes/{id}       -> hero with joined powers
/// GET    /powers            -> list powers
/// GET    /powers/{id}       -> get power
/// PATCH  /powers/{id}       -> update power description
/// POST   /hero_powers       -> link hero to power
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/heroes", get(hero::list))
        .route("/heroes/{id}", get(hero::get_by_id))
        .route("/powers", get(power::list))
        .route("/powers/{id}", get(power::get_by_id).patch(power::update))
        .route("/hero_powers", post(hero_power::create))
}
