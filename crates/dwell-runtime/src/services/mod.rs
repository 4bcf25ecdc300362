pub mod maintenance;
pub mod report;
