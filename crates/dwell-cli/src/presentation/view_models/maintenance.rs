use dwell_engine::BackfillSkips;
use dwell_runtime::{MaintenanceMode, MaintenanceTask};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MaintenanceViewModel {
    pub mode: MaintenanceMode,
    pub property: Option<String>,
    pub total_candidates: u64,
    pub total_changed: u64,
    pub tasks: Vec<TaskViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TaskViewModel {
    pub task: MaintenanceTask,
    pub candidates: u64,
    pub changed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill: Option<BackfillTaskViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<CleanupTaskViewModel>,
}

#[derive(Debug, Serialize)]
pub struct BackfillTaskViewModel {
    pub sessions: Vec<BackfillRowViewModel>,
    pub skipped: BackfillSkips,
}

/// One session the backfill writes (or would write).
#[derive(Debug, Serialize)]
pub struct BackfillRowViewModel {
    pub session_id: String,
    pub property_id: String,
    pub entered_at: String,
    pub last_heartbeat: String,
    pub estimated_secs: i64,
    pub time_spent: i64,
    pub left_at: String,
    pub clamped: bool,
}

#[derive(Debug, Serialize)]
pub struct CleanupTaskViewModel {
    pub session_ids: Vec<String>,
    pub view_ids: Vec<String>,
    pub sessions: Vec<FindingViewModel>,
    pub views: Vec<FindingViewModel>,
}

/// Affected rows of one kind, grouped per property.
#[derive(Debug, Serialize)]
pub struct FindingViewModel {
    pub property_id: String,
    pub rows: u64,
    pub earliest: String,
    pub latest: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for MaintenanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::maintenance::MaintenanceView;
        Box::new(MaintenanceView::new(self, mode))
    }
}
