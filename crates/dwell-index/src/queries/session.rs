use chrono::{DateTime, Utc};
use dwell_types::{
    Departure, Heartbeat, PropertyId, PropertyTimeSession, ReportWindow, format_timestamp,
};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{DELETE_CHUNK, get_opt_ts, get_ts, placeholders, push_window};
use crate::{BackfillWrite, Result};

const SESSION_COLUMNS: &str = "s.id, s.property_id, s.session_key, s.entered_at, s.last_heartbeat, \
     s.left_at, s.time_spent, s.active_time, s.scroll_depth";

fn map_session(row: &Row<'_>) -> rusqlite::Result<PropertyTimeSession> {
    Ok(PropertyTimeSession {
        id: row.get(0)?,
        property_id: PropertyId::from(row.get::<_, String>(1)?),
        session_key: row.get(2)?,
        entered_at: get_ts(row, 3)?,
        last_heartbeat: get_opt_ts(row, 4)?,
        left_at: get_opt_ts(row, 5)?,
        time_spent: row.get(6)?,
        active_time: row.get(7)?,
        scroll_depth: row.get(8)?,
    })
}

/// Open a session for a page load. Reopening the same `(property, key)`
/// returns the existing row untouched.
pub fn open(
    conn: &Connection,
    property_id: &PropertyId,
    session_key: &str,
    entered_at: DateTime<Utc>,
) -> Result<PropertyTimeSession> {
    conn.execute(
        r#"
        INSERT INTO property_time_sessions (id, property_id, session_key, entered_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(property_id, session_key) DO NOTHING
        "#,
        params![
            uuid::Uuid::new_v4().to_string(),
            property_id.as_str(),
            session_key,
            format_timestamp(&entered_at)
        ],
    )?;

    let query = format!(
        "SELECT {} FROM property_time_sessions s WHERE s.property_id = ?1 AND s.session_key = ?2",
        SESSION_COLUMNS
    );
    let session = conn.query_row(&query, params![property_id.as_str(), session_key], map_session)?;

    Ok(session)
}

/// Record a heartbeat. Scroll depth only ratchets up; finalized sessions
/// are left untouched.
pub fn heartbeat(
    conn: &Connection,
    session_id: &str,
    at: DateTime<Utc>,
    beat: &Heartbeat,
) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE property_time_sessions SET
            last_heartbeat = ?2,
            active_time = COALESCE(?3, active_time),
            scroll_depth = CASE
                WHEN ?4 IS NULL THEN scroll_depth
                WHEN scroll_depth IS NULL OR ?4 > scroll_depth THEN ?4
                ELSE scroll_depth
            END
        WHERE id = ?1 AND time_spent IS NULL
        "#,
        params![
            session_id,
            format_timestamp(&at),
            beat.active_time,
            beat.scroll_depth
        ],
    )?;

    Ok(changed > 0)
}

/// Finalize a session from an explicit departure. Write-once.
pub fn finalize(conn: &Connection, session_id: &str, departure: &Departure) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE property_time_sessions SET
            left_at = ?2,
            time_spent = ?3,
            active_time = COALESCE(?4, active_time),
            scroll_depth = COALESCE(?5, scroll_depth)
        WHERE id = ?1 AND time_spent IS NULL
        "#,
        params![
            session_id,
            format_timestamp(&departure.left_at),
            departure.time_spent,
            departure.active_time,
            departure.scroll_depth
        ],
    )?;

    Ok(changed > 0)
}

pub fn get(conn: &Connection, session_id: &str) -> Result<Option<PropertyTimeSession>> {
    let query = format!(
        "SELECT {} FROM property_time_sessions s WHERE s.id = ?1",
        SESSION_COLUMNS
    );
    let session = conn.query_row(&query, [session_id], map_session).optional()?;

    Ok(session)
}

pub fn list_for_property(
    conn: &Connection,
    property_id: &PropertyId,
    window: &ReportWindow,
) -> Result<Vec<PropertyTimeSession>> {
    let mut where_clauses = vec!["s.property_id = ?".to_string()];
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    params.push(Box::new(property_id.as_str().to_string()));
    push_window("s.entered_at", window, &mut where_clauses, &mut params);

    let query = format!(
        "SELECT {} FROM property_time_sessions s WHERE {} ORDER BY s.entered_at ASC, s.id ASC",
        SESSION_COLUMNS,
        where_clauses.join(" AND ")
    );

    select_sessions(conn, &query, &params)
}

pub fn count_for_property(conn: &Connection, property_id: &PropertyId) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM property_time_sessions WHERE property_id = ?1",
        [property_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(count as u64)
}

/// Sessions that never received a duration, optionally for one property.
pub fn list_incomplete(
    conn: &Connection,
    property_id: Option<&PropertyId>,
) -> Result<Vec<PropertyTimeSession>> {
    let mut query = format!(
        "SELECT {} FROM property_time_sessions s WHERE s.time_spent IS NULL",
        SESSION_COLUMNS
    );
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(id) = property_id {
        query.push_str(" AND s.property_id = ?");
        params.push(Box::new(id.as_str().to_string()));
    }
    query.push_str(" ORDER BY s.entered_at ASC, s.id ASC");

    select_sessions(conn, &query, &params)
}

/// Persist an estimated duration. Only touches rows still lacking one.
///
/// Heartbeat active time is capped at the persisted duration, matching what
/// the reconciler reported for the row while it was still estimated.
pub fn backfill(conn: &Connection, write: &BackfillWrite) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE property_time_sessions SET
            time_spent = ?2,
            active_time = MIN(COALESCE(active_time, ?2), ?2),
            left_at = COALESCE(left_at, ?3)
        WHERE id = ?1 AND time_spent IS NULL
        "#,
        params![
            &write.session_id,
            write.time_spent,
            format_timestamp(&write.left_at)
        ],
    )?;

    Ok(changed > 0)
}

/// Sessions entered before their property was created.
pub fn find_antedated(
    conn: &Connection,
    property_id: Option<&PropertyId>,
) -> Result<Vec<PropertyTimeSession>> {
    let mut query = format!(
        r#"
        SELECT {}
        FROM property_time_sessions s
        JOIN properties p ON s.property_id = p.id
        WHERE s.entered_at < p.created_at
        "#,
        SESSION_COLUMNS
    );
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(id) = property_id {
        query.push_str(" AND s.property_id = ?");
        params.push(Box::new(id.as_str().to_string()));
    }
    query.push_str(" ORDER BY s.entered_at ASC, s.id ASC");

    select_sessions(conn, &query, &params)
}

/// Sessions whose property no longer exists.
pub fn find_orphaned(
    conn: &Connection,
    property_id: Option<&PropertyId>,
) -> Result<Vec<PropertyTimeSession>> {
    let mut query = format!(
        r#"
        SELECT {}
        FROM property_time_sessions s
        LEFT JOIN properties p ON s.property_id = p.id
        WHERE p.id IS NULL
        "#,
        SESSION_COLUMNS
    );
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(id) = property_id {
        query.push_str(" AND s.property_id = ?");
        params.push(Box::new(id.as_str().to_string()));
    }
    query.push_str(" ORDER BY s.entered_at ASC, s.id ASC");

    select_sessions(conn, &query, &params)
}

pub fn delete_by_ids(conn: &Connection, ids: &[String]) -> Result<usize> {
    let mut changed = 0;
    for chunk in ids.chunks(DELETE_CHUNK) {
        let query = format!(
            "DELETE FROM property_time_sessions WHERE id IN ({})",
            placeholders(chunk.len())
        );
        changed += conn.execute(&query, rusqlite::params_from_iter(chunk.iter()))?;
    }

    Ok(changed)
}

fn select_sessions(
    conn: &Connection,
    query: &str,
    params: &[Box<dyn rusqlite::ToSql>],
) -> Result<Vec<PropertyTimeSession>> {
    let mut stmt = conn.prepare(query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let sessions = stmt
        .query_map(param_refs.as_slice(), map_session)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(sessions)
}
