//! Domain types and rules for the heroes service.
//!
//! Holds everything that does not touch the database or HTTP: the shared
//! id type, the domain error, and the input rules applied before a
//! hero-power association is written.

pub mod error;
pub mod hero_power;
pub mod types;
