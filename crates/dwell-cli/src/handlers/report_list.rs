use crate::args::{ViewModeArgs, WindowArgs};
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use dwell_runtime::Workspace;

pub fn handle(
    workspace: &Workspace,
    window: &WindowArgs,
    limit: Option<usize>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let window = window.resolve()?;

    let reports = workspace.reports().list_reports(&window, limit)?;

    let view_model = presenters::present_report_list(reports, &window, limit);
    ConsoleRenderer::new(format, view_mode.resolve()).render(view_model)
}
