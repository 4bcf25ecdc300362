use clap::ValueEnum;
use dwell_runtime::MaintenanceTask;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TaskArg {
    Backfill,
    Antedated,
    Orphans,
    All,
}

impl TaskArg {
    pub fn tasks(self) -> Vec<MaintenanceTask> {
        match self {
            TaskArg::Backfill => vec![MaintenanceTask::Backfill],
            TaskArg::Antedated => vec![MaintenanceTask::Antedated],
            TaskArg::Orphans => vec![MaintenanceTask::Orphans],
            TaskArg::All => MaintenanceTask::all(),
        }
    }
}

impl fmt::Display for TaskArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskArg::Backfill => write!(f, "backfill"),
            TaskArg::Antedated => write!(f, "antedated"),
            TaskArg::Orphans => write!(f, "orphans"),
            TaskArg::All => write!(f, "all"),
        }
    }
}
