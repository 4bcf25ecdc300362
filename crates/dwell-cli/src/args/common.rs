use clap::Args;
use dwell_types::ReportWindow;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Half-open reporting window on entry/view time.
#[derive(Debug, Clone, Default, Args)]
pub struct WindowArgs {
    #[arg(long, help = "Start of window, inclusive (RFC 3339 or YYYY-MM-DD)")]
    pub since: Option<String>,

    #[arg(long, help = "End of window, exclusive (RFC 3339 or YYYY-MM-DD)")]
    pub until: Option<String>,
}

impl WindowArgs {
    pub fn resolve(&self) -> dwell_types::Result<ReportWindow> {
        ReportWindow::parse(self.since.as_deref(), self.until.as_deref())
    }
}
