use super::args::{Cli, Commands, PropertyCommand, ReportCommand};
use super::handlers;
use crate::presentation::OutputFormat;
use anyhow::Result;
use dwell_runtime::{Workspace, resolve_workspace_path};
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = cli.config.as_deref().map(PathBuf::from);
    let config_path = config_path.as_deref();
    let format = OutputFormat::from(cli.format);

    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Init { force } => handlers::init::handle(&data_dir, config_path, force, format),

        Commands::Property { command } => {
            let workspace = open_workspace(&data_dir, config_path)?;

            match command {
                PropertyCommand::List { view_mode } => {
                    handlers::property_list::handle(&workspace, format, &view_mode)
                }
            }
        }

        Commands::Report { command } => {
            let workspace = open_workspace(&data_dir, config_path)?;

            match command {
                ReportCommand::Show {
                    property_id,
                    window,
                    view_mode,
                } => handlers::report_show::handle(
                    &workspace,
                    &property_id,
                    &window,
                    format,
                    &view_mode,
                ),
                ReportCommand::List {
                    window,
                    limit,
                    view_mode,
                } => handlers::report_list::handle(&workspace, &window, limit, format, &view_mode),
            }
        }

        Commands::Maintain {
            task,
            property,
            dry_run: _,
            execute,
            view_mode,
        } => {
            let workspace = open_workspace(&data_dir, config_path)?;
            handlers::maintain::handle(&workspace, task, property, execute, format, &view_mode)
        }
    }
}

fn open_workspace(data_dir: &Path, config_path: Option<&Path>) -> Result<Workspace> {
    Ok(Workspace::open(data_dir, config_path)?)
}
