use chrono::{DateTime, Utc};
use dwell_types::{PropertyId, PropertyView, ReportWindow, format_timestamp};
use rusqlite::{Connection, params};

use super::{DELETE_CHUNK, get_ts, placeholders, push_window};
use crate::Result;

pub fn insert(
    conn: &Connection,
    property_id: &PropertyId,
    viewer_ip: Option<&str>,
    viewed_at: DateTime<Utc>,
) -> Result<PropertyView> {
    let view = PropertyView {
        id: uuid::Uuid::new_v4().to_string(),
        property_id: property_id.clone(),
        viewer_ip: viewer_ip.map(str::to_string),
        viewed_at,
    };

    conn.execute(
        r#"
        INSERT INTO property_views (id, property_id, viewer_ip, viewed_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            &view.id,
            view.property_id.as_str(),
            &view.viewer_ip,
            format_timestamp(&view.viewed_at)
        ],
    )?;

    Ok(view)
}

pub fn count_for_property(
    conn: &Connection,
    property_id: &PropertyId,
    window: &ReportWindow,
) -> Result<u64> {
    let mut where_clauses = vec!["property_id = ?".to_string()];
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    params.push(Box::new(property_id.as_str().to_string()));
    push_window("viewed_at", window, &mut where_clauses, &mut params);

    let query = format!(
        "SELECT COUNT(*) FROM property_views WHERE {}",
        where_clauses.join(" AND ")
    );

    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let count: i64 = conn.query_row(&query, param_refs.as_slice(), |row| row.get(0))?;

    Ok(count as u64)
}

/// Views timestamped before their property was created.
pub fn find_antedated(
    conn: &Connection,
    property_id: Option<&PropertyId>,
) -> Result<Vec<PropertyView>> {
    let mut query = String::from(
        r#"
        SELECT v.id, v.property_id, v.viewer_ip, v.viewed_at
        FROM property_views v
        JOIN properties p ON v.property_id = p.id
        WHERE v.viewed_at < p.created_at
        "#,
    );
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(id) = property_id {
        query.push_str(" AND v.property_id = ?");
        params.push(Box::new(id.as_str().to_string()));
    }
    query.push_str(" ORDER BY v.viewed_at ASC, v.id ASC");

    select_views(conn, &query, &params)
}

/// Views whose property no longer exists.
pub fn find_orphaned(
    conn: &Connection,
    property_id: Option<&PropertyId>,
) -> Result<Vec<PropertyView>> {
    let mut query = String::from(
        r#"
        SELECT v.id, v.property_id, v.viewer_ip, v.viewed_at
        FROM property_views v
        LEFT JOIN properties p ON v.property_id = p.id
        WHERE p.id IS NULL
        "#,
    );
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(id) = property_id {
        query.push_str(" AND v.property_id = ?");
        params.push(Box::new(id.as_str().to_string()));
    }
    query.push_str(" ORDER BY v.viewed_at ASC, v.id ASC");

    select_views(conn, &query, &params)
}

pub fn delete_by_ids(conn: &Connection, ids: &[String]) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut changed = 0;
    for chunk in ids.chunks(DELETE_CHUNK) {
        let query = format!(
            "DELETE FROM property_views WHERE id IN ({})",
            placeholders(chunk.len())
        );
        changed += conn.execute(&query, rusqlite::params_from_iter(chunk.iter()))?;
    }

    Ok(changed)
}

fn select_views(
    conn: &Connection,
    query: &str,
    params: &[Box<dyn rusqlite::ToSql>],
) -> Result<Vec<PropertyView>> {
    let mut stmt = conn.prepare(query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let views = stmt
        .query_map(param_refs.as_slice(), |row| {
            Ok(PropertyView {
                id: row.get(0)?,
                property_id: PropertyId::from(row.get::<_, String>(1)?),
                viewer_ip: row.get(2)?,
                viewed_at: get_ts(row, 3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(views)
}
