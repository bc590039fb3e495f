//! Repository layer: one zero-sized struct per table with async query
//! functions.
//!
//! Lookups that must run inside a caller-owned transaction take a generic
//! [`sqlx::Executor`], so they accept either `&DbPool` or `&mut *tx`.

pub mod hero_power_repo;
pub mod hero_repo;
pub mod power_repo;

pub use hero_power_repo::HeroPowerRepo;
pub use hero_repo::HeroRepo;
pub use power_repo::PowerRepo;
