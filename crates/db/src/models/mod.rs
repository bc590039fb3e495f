//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the
//! table row, plus the input DTOs and joined read shapes for that entity.
//! Serialized fields are exactly the keys the HTTP API emits.

pub mod hero;
pub mod hero_power;
pub mod power;
