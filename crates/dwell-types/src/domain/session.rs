use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PropertyId;

/// A visitor's timed engagement with one property page.
///
/// Created on page open, touched by heartbeats while the page stays open,
/// and finalized (`time_spent` set) when the visitor leaves or the session
/// is backfilled. A session without `time_spent` is *incomplete*.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTimeSession {
    /// Row identifier.
    pub id: String,
    pub property_id: PropertyId,
    /// Client-side session key (one browser tab).
    pub session_key: String,
    pub entered_at: DateTime<Utc>,
    pub last_heartbeat: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
    /// Finalized duration in seconds.
    pub time_spent: Option<i64>,
    /// Seconds the page was focused/visible.
    pub active_time: Option<i64>,
    /// Deepest scroll position reached, 0-100.
    pub scroll_depth: Option<f64>,
}

impl PropertyTimeSession {
    pub fn is_incomplete(&self) -> bool {
        self.time_spent.is_none()
    }

    /// Whole seconds between entry and last heartbeat, if a heartbeat exists.
    pub fn heartbeat_span_secs(&self) -> Option<i64> {
        self.last_heartbeat
            .map(|hb| (hb - self.entered_at).num_seconds())
    }
}

/// Heartbeat payload sent while a page stays open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heartbeat {
    pub active_time: Option<i64>,
    pub scroll_depth: Option<f64>,
}

/// Departure payload sent when the visitor leaves explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    pub left_at: DateTime<Utc>,
    pub time_spent: i64,
    pub active_time: Option<i64>,
    pub scroll_depth: Option<f64>,
}
