use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`; output
/// goes to stderr so `--format json` keeps stdout parseable.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));

    // A subscriber may already be installed when the CLI is embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn directive(level: LogLevel) -> String {
    format!("dwell={level},dwell_runtime={level},dwell_index={level},warn")
}
