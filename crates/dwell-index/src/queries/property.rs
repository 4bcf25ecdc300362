use dwell_types::{Property, PropertyId, format_timestamp};
use rusqlite::{Connection, OptionalExtension, params};

use super::get_ts;
use crate::Result;

pub fn insert_or_update(conn: &Connection, property: &Property) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO properties (id, title, created_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET
            title = ?2,
            created_at = ?3
        "#,
        params![
            property.id.as_str(),
            &property.title,
            format_timestamp(&property.created_at)
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, id: &PropertyId) -> Result<Option<Property>> {
    let property = conn
        .query_row(
            r#"
            SELECT id, title, created_at
            FROM properties
            WHERE id = ?1
            "#,
            [id.as_str()],
            |row| {
                Ok(Property {
                    id: PropertyId::from(row.get::<_, String>(0)?),
                    title: row.get(1)?,
                    created_at: get_ts(row, 2)?,
                })
            },
        )
        .optional()?;

    Ok(property)
}

pub fn list(conn: &Connection) -> Result<Vec<Property>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, created_at
        FROM properties
        ORDER BY created_at DESC, id ASC
        "#,
    )?;

    let properties = stmt
        .query_map([], |row| {
            Ok(Property {
                id: PropertyId::from(row.get::<_, String>(0)?),
                title: row.get(1)?,
                created_at: get_ts(row, 2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(properties)
}

/// Delete the property row only; its views and sessions become orphans.
pub fn delete(conn: &Connection, id: &PropertyId) -> Result<bool> {
    let changed = conn.execute("DELETE FROM properties WHERE id = ?1", [id.as_str()])?;
    Ok(changed > 0)
}
