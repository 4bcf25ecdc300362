//! # Presentation Layer
//!
//! Console output for the CLI, split the same way for every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** `average_time_spent: 23`, not `"23s"`.
//!   JSON output is an API; scripts need numbers.
//! * **Presenters** convert runtime reports into ViewModels and decide which
//!   badge and tips to attach. They never format strings for display.
//! * **Views** implement `fmt::Display`. Layout, colors and `ViewMode`
//!   filtering live here, using `formatters`.
//! * **`--format json` ignores `ViewMode`.** It always dumps the full
//!   `CommandResultViewModel`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
