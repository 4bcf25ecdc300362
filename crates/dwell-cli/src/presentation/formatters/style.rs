use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Colors only when stdout is a terminal and `NO_COLOR` is unset.
pub fn enabled() -> bool {
    *ENABLED.get_or_init(|| {
        std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
    })
}

pub fn heading(text: &str) -> String {
    if enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn good(text: &str) -> String {
    if enabled() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

pub fn caution(text: &str) -> String {
    if enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn command(text: &str) -> String {
    if enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}
