pub mod common;
pub mod init;
pub mod maintenance;
pub mod property;
pub mod report;
pub mod result;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode, WindowViewModel};
pub use init::InitResultViewModel;
pub use maintenance::{
    BackfillRowViewModel, BackfillTaskViewModel, CleanupTaskViewModel, FindingViewModel,
    MaintenanceViewModel, TaskViewModel,
};
pub use property::{PropertyEntryViewModel, PropertyListViewModel};
pub use report::{MetricsViewModel, ReportListViewModel, ReportViewModel};
pub use result::CommandResultViewModel;

/// Bridge from a ViewModel to the `Display` view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
