pub mod init;
pub mod maintenance;
pub mod property;
pub mod report;
