// NOTE: dwell Architecture Rationale
//
// Why estimate incomplete sessions at read time (not at write time)?
// - Browsers close tabs without a final beacon, so most sessions never finalize
// - Heartbeats already record a lower bound of the visit
// - Reports stay correct without waiting for the backfill to run
// - Trade-off: reports do slightly more arithmetic per request
//
// Why one `maintain` command (not per-incident scripts)?
// - Dry-run first, then execute with the same selection logic
// - Every write is guarded, so re-running is a no-op
// - Output is structured, so an operator can diff two runs

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, PropertyCommand, ReportCommand};
pub use commands::run;
