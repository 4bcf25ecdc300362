use dwell_engine::ReconcileBreakdown;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode, WindowViewModel};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Reconciled metrics. Durations are whole seconds, percentages are 0-100
/// with two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsViewModel {
    pub view_count: u64,
    pub session_count: u64,
    pub average_time_spent: u64,
    pub average_active_time: u64,
    pub average_scroll_depth: f64,
    pub bounce_rate: f64,
    pub breakdown: ReconcileBreakdown,
}

#[derive(Debug, Serialize)]
pub struct ReportViewModel {
    pub property_id: String,
    pub title: String,
    pub window: WindowViewModel,
    pub metrics: MetricsViewModel,
}

#[derive(Debug, Serialize)]
pub struct ReportListViewModel {
    pub window: WindowViewModel,
    pub limit: Option<usize>,
    pub reports: Vec<ReportViewModel>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ReportViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::report::ReportView;
        Box::new(ReportView::new(self, mode))
    }
}

impl CreateView for ReportListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::report::ReportListView;
        Box::new(ReportListView::new(self, mode))
    }
}
