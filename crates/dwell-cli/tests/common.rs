//! Shared setup for CLI integration tests.
#![allow(dead_code)]

use dwell_testing::{TestWorld, fixtures};
use dwell_types::PropertyId;

/// Initialized world seeded with the villa example.
pub fn seeded_world() -> (TestWorld, PropertyId) {
    let world = TestWorld::new().initialized();
    let db = world.database().expect("Failed to open database");
    let id = fixtures::seed_villa(&db).expect("Failed to seed");
    (world, id)
}
