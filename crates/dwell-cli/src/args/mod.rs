// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `report show` / `report list` read, `maintain` writes, `property` inspects
// - Keeps the mutating command visually separate in --help
// - Example: `report show villa-7` vs flat `show-report villa-7`

mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "dwell")]
#[command(about = "Engagement reports and data maintenance for property listing pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $DWELL_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Config file (default: <data-dir>/config.toml)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskArg;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_maintain_defaults_to_dry_run_of_all_tasks() {
        let cli = Cli::parse_from(["dwell", "maintain"]);
        match cli.command {
            Commands::Maintain {
                task,
                property,
                execute,
                ..
            } => {
                assert_eq!(task, TaskArg::All);
                assert!(property.is_none());
                assert!(!execute);
            }
            _ => panic!("expected maintain"),
        }
    }

    #[test]
    fn test_dry_run_conflicts_with_execute() {
        let result = Cli::try_parse_from(["dwell", "maintain", "--dry-run", "--execute"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "dwell",
            "report",
            "show",
            "villa-7",
            "--format",
            "json",
            "--data-dir",
            "/tmp/dwell",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/dwell"));
    }
}
