use crate::args::{ViewModeArgs, WindowArgs};
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use dwell_runtime::Workspace;
use dwell_types::PropertyId;

pub fn handle(
    workspace: &Workspace,
    property_id: &str,
    window: &WindowArgs,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let window = window.resolve()?;
    let property_id = PropertyId::new(property_id);

    let report = workspace.reports().property_report(&property_id, &window)?;

    let view_model = presenters::present_report(report);
    ConsoleRenderer::new(format, view_mode.resolve()).render(view_model)
}
