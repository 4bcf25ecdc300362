pub mod property;
pub mod session;
pub mod view;

use chrono::{DateTime, Utc};
use dwell_types::{ReportWindow, format_timestamp};
use rusqlite::Row;
use rusqlite::types::Type;

// Keeps `IN (...)` lists well under SQLite's bound-parameter limit
pub(crate) const DELETE_CHUNK: usize = 500;

/// Read a required timestamp column.
pub(crate) fn get_ts(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_ts(idx, &raw)
}

/// Read a nullable timestamp column.
pub(crate) fn get_opt_ts(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    row.get::<_, Option<String>>(idx)?
        .map(|raw| parse_ts(idx, &raw))
        .transpose()
}

fn parse_ts(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Append `column >= ?` / `column < ?` filters for a reporting window.
pub(crate) fn push_window(
    column: &str,
    window: &ReportWindow,
    where_clauses: &mut Vec<String>,
    params: &mut Vec<Box<dyn rusqlite::ToSql>>,
) {
    if let Some(since) = window.since {
        where_clauses.push(format!("{} >= ?", column));
        params.push(Box::new(format_timestamp(&since)));
    }
    if let Some(until) = window.until {
        where_clauses.push(format!("{} < ?", column));
        params.push(Box::new(format_timestamp(&until)));
    }
}

/// SQL `IN (?, ?, ...)` placeholder list.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
