//! Testing infrastructure for dwell integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: seeded properties, views and sessions
//! - `assertions`: checks on the JSON output envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
