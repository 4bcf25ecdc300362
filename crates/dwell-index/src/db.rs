use chrono::{DateTime, Utc};
use dwell_types::{
    Departure, Heartbeat, Property, PropertyId, PropertyTimeSession, PropertyView, ReportWindow,
};
use rusqlite::Connection;
use std::path::Path;

use crate::queries::{property, session, view};
use crate::{BackfillWrite, PropertySummary, Result, schema};

/// Handle to the engagement store.
///
/// Owned by the caller and passed into every service that needs it; there is
/// no process-wide client.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "opened engagement store");

        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    // Properties

    pub fn insert_or_update_property(&self, record: &Property) -> Result<()> {
        property::insert_or_update(&self.conn, record)
    }

    pub fn get_property(&self, id: &PropertyId) -> Result<Option<Property>> {
        property::get(&self.conn, id)
    }

    pub fn list_properties(&self) -> Result<Vec<Property>> {
        property::list(&self.conn)
    }

    pub fn list_property_summaries(&self) -> Result<Vec<PropertySummary>> {
        property::list(&self.conn)?
            .into_iter()
            .map(|p| {
                let view_count = view::count_for_property(&self.conn, &p.id, &ReportWindow::all())?;
                let session_count = session::count_for_property(&self.conn, &p.id)?;
                Ok(PropertySummary {
                    property: p,
                    view_count,
                    session_count,
                })
            })
            .collect()
    }

    pub fn delete_property(&self, id: &PropertyId) -> Result<bool> {
        property::delete(&self.conn, id)
    }

    // Tracking write path

    pub fn record_view(
        &self,
        property_id: &PropertyId,
        viewer_ip: Option<&str>,
        viewed_at: DateTime<Utc>,
    ) -> Result<PropertyView> {
        view::insert(&self.conn, property_id, viewer_ip, viewed_at)
    }

    pub fn open_session(
        &self,
        property_id: &PropertyId,
        session_key: &str,
        entered_at: DateTime<Utc>,
    ) -> Result<PropertyTimeSession> {
        session::open(&self.conn, property_id, session_key, entered_at)
    }

    pub fn heartbeat(&self, session_id: &str, at: DateTime<Utc>, beat: &Heartbeat) -> Result<bool> {
        session::heartbeat(&self.conn, session_id, at, beat)
    }

    pub fn finalize_session(&self, session_id: &str, departure: &Departure) -> Result<bool> {
        session::finalize(&self.conn, session_id, departure)
    }

    // Reads for reconciliation

    pub fn get_session(&self, session_id: &str) -> Result<Option<PropertyTimeSession>> {
        session::get(&self.conn, session_id)
    }

    pub fn list_sessions(
        &self,
        property_id: &PropertyId,
        window: &ReportWindow,
    ) -> Result<Vec<PropertyTimeSession>> {
        session::list_for_property(&self.conn, property_id, window)
    }

    pub fn count_views(&self, property_id: &PropertyId, window: &ReportWindow) -> Result<u64> {
        view::count_for_property(&self.conn, property_id, window)
    }

    pub fn list_incomplete_sessions(
        &self,
        property_id: Option<&PropertyId>,
    ) -> Result<Vec<PropertyTimeSession>> {
        session::list_incomplete(&self.conn, property_id)
    }

    // Data hygiene

    pub fn find_antedated_sessions(
        &self,
        property_id: Option<&PropertyId>,
    ) -> Result<Vec<PropertyTimeSession>> {
        session::find_antedated(&self.conn, property_id)
    }

    pub fn find_antedated_views(&self, property_id: Option<&PropertyId>) -> Result<Vec<PropertyView>> {
        view::find_antedated(&self.conn, property_id)
    }

    pub fn find_orphaned_sessions(
        &self,
        property_id: Option<&PropertyId>,
    ) -> Result<Vec<PropertyTimeSession>> {
        session::find_orphaned(&self.conn, property_id)
    }

    pub fn find_orphaned_views(&self, property_id: Option<&PropertyId>) -> Result<Vec<PropertyView>> {
        view::find_orphaned(&self.conn, property_id)
    }

    // Guarded maintenance writes, one transaction per batch

    /// Apply backfill writes; returns how many rows actually changed.
    pub fn apply_backfill(&self, writes: &[BackfillWrite]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut changed = 0;
        for write in writes {
            if session::backfill(&tx, write)? {
                changed += 1;
            }
        }
        tx.commit()?;

        tracing::debug!(planned = writes.len(), changed, "applied session backfill");
        Ok(changed)
    }

    /// Delete flagged sessions and views together; either both go or neither.
    pub fn delete_rows(&self, session_ids: &[String], view_ids: &[String]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let sessions = session::delete_by_ids(&tx, session_ids)?;
        let views = view::delete_by_ids(&tx, view_ids)?;
        tx.commit()?;

        tracing::debug!(sessions, views, "deleted flagged rows");
        Ok(sessions + views)
    }
}
