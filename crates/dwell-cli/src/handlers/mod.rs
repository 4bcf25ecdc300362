pub mod init;
pub mod maintain;
pub mod property_list;
pub mod report_list;
pub mod report_show;
