use crate::args::ViewModeArgs;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use dwell_runtime::Workspace;

pub fn handle(workspace: &Workspace, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let summaries = workspace.database().list_property_summaries()?;

    let view_model = presenters::present_property_list(summaries);
    ConsoleRenderer::new(format, view_mode.resolve()).render(view_model)
}
