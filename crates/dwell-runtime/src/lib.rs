pub mod config;
pub mod error;
pub mod services;
mod workspace;

pub use config::{AnalyticsConfig, Config, DatabaseConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use services::maintenance::{
    CleanupFindings, MaintenanceMode, MaintenanceReport, MaintenanceRequest, MaintenanceService,
    MaintenanceTask, TaskReport,
};
pub use services::report::{PropertyReport, ReportService};
pub use workspace::{InitOutcome, Workspace};
