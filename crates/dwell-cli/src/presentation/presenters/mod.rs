pub mod init;
pub mod maintenance;
pub mod property;
pub mod report;

pub use init::present_init_result;
pub use maintenance::present_maintenance_report;
pub use property::present_property_list;
pub use report::{present_report, present_report_list};
