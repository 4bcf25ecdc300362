//! Seed data written straight through the index write path, the same calls
//! the web application makes.

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use dwell_index::Database;
use dwell_types::{Departure, Heartbeat, Property, PropertyId};

/// Creation time of every seeded property.
pub fn listed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

/// Entry time used by the seeded sessions (one day after listing).
pub fn visit_day() -> DateTime<Utc> {
    listed_at() + Duration::days(1)
}

pub fn add_property(db: &Database, id: &str, title: &str) -> Result<PropertyId> {
    let property_id = PropertyId::from(id);
    db.insert_or_update_property(&Property {
        id: property_id.clone(),
        title: title.to_string(),
        created_at: listed_at(),
    })?;
    Ok(property_id)
}

pub fn add_view(db: &Database, property_id: &PropertyId, at: DateTime<Utc>) -> Result<String> {
    Ok(db.record_view(property_id, Some("10.0.0.1"), at)?.id)
}

/// A session that left through the normal beacon.
pub fn add_completed_session(
    db: &Database,
    property_id: &PropertyId,
    key: &str,
    entered_at: DateTime<Utc>,
    secs: i64,
) -> Result<String> {
    let session = db.open_session(property_id, key, entered_at)?;
    db.finalize_session(
        &session.id,
        &Departure {
            left_at: entered_at + Duration::seconds(secs),
            time_spent: secs,
            active_time: None,
            scroll_depth: None,
        },
    )?;
    Ok(session.id)
}

/// A tab that was closed without a beacon; last heartbeat `secs` after entry.
pub fn add_abandoned_session(
    db: &Database,
    property_id: &PropertyId,
    key: &str,
    entered_at: DateTime<Utc>,
    secs: i64,
) -> Result<String> {
    let session = db.open_session(property_id, key, entered_at)?;
    db.heartbeat(
        &session.id,
        entered_at + Duration::seconds(secs),
        &Heartbeat::default(),
    )?;
    Ok(session.id)
}

/// Two finalized sessions (40s, 20s), one abandoned after 10s, three views.
/// Reconciles to an average of 23s with a 66.67% bounce rate.
pub fn seed_villa(db: &Database) -> Result<PropertyId> {
    let id = add_property(db, "villa-7", "Villa 7")?;
    let day = visit_day();

    add_completed_session(db, &id, "a", day, 40)?;
    add_completed_session(db, &id, "b", day, 20)?;
    add_abandoned_session(db, &id, "c", day, 10)?;
    for _ in 0..3 {
        add_view(db, &id, day)?;
    }

    Ok(id)
}
