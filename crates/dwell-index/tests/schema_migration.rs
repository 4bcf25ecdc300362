//! Integration tests for schema versioning
//!
//! Opening a database must never drop tracking rows, and must refuse a
//! database written by a newer schema.

use chrono::{TimeZone, Utc};
use dwell_index::{Database, Error, SCHEMA_VERSION};
use dwell_types::{PropertyId, ReportWindow};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

/// Create a database predating `user_version` tracking, with one view row
fn create_unversioned_db(path: &Path) {
    let conn = Connection::open(path).unwrap();

    conn.execute_batch(
        r#"
        CREATE TABLE property_views (
            id TEXT PRIMARY KEY,
            property_id TEXT NOT NULL,
            viewer_ip TEXT,
            viewed_at TEXT NOT NULL
        );

        INSERT INTO property_views (id, property_id, viewer_ip, viewed_at)
        VALUES ('v-1', 'prop-1', '10.0.0.1', '2025-01-01T00:00:00.000Z');
        "#,
    )
    .unwrap();
}

#[test]
fn test_upgrade_keeps_existing_rows() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("dwell.db");
    create_unversioned_db(&db_path);

    let db = Database::open(&db_path).expect("open should upgrade in place");

    let views = db
        .count_views(&PropertyId::from("prop-1"), &ReportWindow::all())
        .unwrap();
    assert_eq!(views, 1, "existing views must survive the upgrade");

    let conn = Connection::open(&db_path).unwrap();
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);

    // New tables are usable right away
    let session = db
        .open_session(
            &PropertyId::from("prop-1"),
            "tab",
            Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        )
        .unwrap();
    assert!(session.is_incomplete());
}

#[test]
fn test_newer_schema_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("dwell.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION + 1), [])
            .unwrap();
    }

    let result = Database::open(&db_path);
    assert!(matches!(result, Err(Error::SchemaTooNew { .. })));
}

#[test]
fn test_reopen_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dwell.db");

    {
        let db = Database::open(&db_path).unwrap();
        db.record_view(
            &PropertyId::from("prop-1"),
            None,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();
    }

    let db = Database::open(&db_path).unwrap();
    let count = db
        .count_views(&PropertyId::from("prop-1"), &ReportWindow::all())
        .unwrap();
    assert_eq!(count, 1);
}
