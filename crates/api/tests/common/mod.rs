#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use heroes_api::config::ServerConfig;
use heroes_api::router::build_app_router;
use heroes_api::state::AppState;
use heroes_db::models::hero::{CreateHero, Hero};
use heroes_db::models::hero_power::CreateHeroPower;
use heroes_db::models::power::{CreatePower, Power};
use heroes_db::repositories::{HeroPowerRepo, HeroRepo, PowerRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
        seed_on_start: false,
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, json).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PATCH, uri, json).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_hero(pool: &SqlitePool, name: &str, super_name: &str) -> Hero {
    let mut conn = pool.acquire().await.unwrap();
    HeroRepo::create(
        &mut conn,
        &CreateHero {
            name: name.to_string(),
            super_name: super_name.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn insert_power(pool: &SqlitePool, name: &str, description: &str) -> Power {
    let mut conn = pool.acquire().await.unwrap();
    PowerRepo::create(
        &mut conn,
        &CreatePower {
            name: name.to_string(),
            description: description.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn link(pool: &SqlitePool, hero_id: i64, power_id: i64, strength: &str) {
    let mut conn = pool.acquire().await.unwrap();
    HeroPowerRepo::create(
        &mut conn,
        &CreateHeroPower {
            strength: strength.to_string(),
            hero_id,
            power_id,
        },
    )
    .await
    .unwrap();
}

pub async fn hero_power_count(pool: &SqlitePool) -> i64 {
    HeroPowerRepo::count(pool).await.unwrap()
}
