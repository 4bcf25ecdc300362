use crate::args::ViewModeArgs;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use crate::types::TaskArg;
use anyhow::Result;
use chrono::Utc;
use dwell_runtime::{MaintenanceMode, MaintenanceRequest, Workspace};
use dwell_types::PropertyId;

pub fn handle(
    workspace: &Workspace,
    task: TaskArg,
    property: Option<String>,
    execute: bool,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let mode = if execute {
        MaintenanceMode::Execute
    } else {
        MaintenanceMode::DryRun
    };

    let request = MaintenanceRequest {
        tasks: task.tasks(),
        property: property.map(PropertyId::from),
        mode,
        now: Utc::now(),
    };

    let report = workspace.maintenance().run(&request)?;

    let view_model = presenters::present_maintenance_report(report, &task.to_string());
    ConsoleRenderer::new(format, view_mode.resolve()).render(view_model)
}
