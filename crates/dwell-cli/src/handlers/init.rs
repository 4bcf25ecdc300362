use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use anyhow::Result;
use dwell_runtime::Workspace;
use std::path::Path;

pub fn handle(
    data_dir: &Path,
    config_path: Option<&Path>,
    force: bool,
    format: OutputFormat,
) -> Result<()> {
    let outcome = Workspace::init(data_dir, config_path, force)?;

    let view_model = presenters::present_init_result(data_dir, outcome);
    ConsoleRenderer::new(format, ViewMode::default()).render(view_model)
}
