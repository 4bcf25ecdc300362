use super::common::{ViewModeArgs, WindowArgs};
use crate::types::TaskArg;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory, default config and database")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml with defaults")]
        force: bool,
    },

    #[command(about = "Inspect tracked properties")]
    Property {
        #[command(subcommand)]
        command: PropertyCommand,
    },

    #[command(about = "Engagement reports")]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    #[command(about = "Backfill abandoned sessions and clean up orphaned or antedated rows")]
    Maintain {
        #[arg(long, default_value = "all")]
        task: TaskArg,

        #[arg(long, help = "Restrict to one property")]
        property: Option<String>,

        #[arg(
            long,
            conflicts_with = "execute",
            help = "Report what would change without writing (default)"
        )]
        dry_run: bool,

        #[arg(long, help = "Apply the changes")]
        execute: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum PropertyCommand {
    #[command(about = "List properties with view and session counts")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    #[command(about = "Engagement metrics for one property")]
    Show {
        #[arg(help = "Property ID")]
        property_id: String,

        #[command(flatten)]
        window: WindowArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Engagement metrics for every property, busiest first")]
    List {
        #[command(flatten)]
        window: WindowArgs,

        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}
