use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Store Design
//
// Tracking rows are the only copy of engagement data, so the schema is
// upgraded in place and never dropped. Property deletion does not cascade:
// orphaned views/sessions are left for `dwell maintain --task orphans`.
// Timestamps are canonical RFC 3339 text (see dwell_types::format_timestamp)
// so range filters are plain string comparisons.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::SchemaTooNew {
            found: current_version,
            supported: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS property_views (
            id TEXT PRIMARY KEY,
            property_id TEXT NOT NULL,
            viewer_ip TEXT,
            viewed_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS property_time_sessions (
            id TEXT PRIMARY KEY,
            property_id TEXT NOT NULL,
            session_key TEXT NOT NULL,
            entered_at TEXT NOT NULL,
            last_heartbeat TEXT,
            left_at TEXT,
            time_spent INTEGER,
            active_time INTEGER,
            scroll_depth REAL,
            UNIQUE (property_id, session_key)
        );

        CREATE INDEX IF NOT EXISTS idx_views_property_ts ON property_views(property_id, viewed_at);
        CREATE INDEX IF NOT EXISTS idx_sessions_property_ts ON property_time_sessions(property_id, entered_at);
        CREATE INDEX IF NOT EXISTS idx_sessions_incomplete ON property_time_sessions(time_spent) WHERE time_spent IS NULL;
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}
