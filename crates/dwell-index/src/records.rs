use chrono::{DateTime, Utc};
use dwell_types::Property;

/// Property with row counts, for listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PropertySummary {
    pub property: Property,
    pub view_count: u64,
    pub session_count: u64,
}

/// One guarded duration write produced by backfill planning.
///
/// Applied with `WHERE time_spent IS NULL`, so replaying it is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct BackfillWrite {
    /// Session row id.
    pub session_id: String,
    /// Seconds to persist as `time_spent`; also the cap for `active_time`.
    pub time_spent: i64,
    pub left_at: DateTime<Utc>,
}
