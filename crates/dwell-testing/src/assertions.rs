//! Assertions on the `{ badge, content, suggestions }` JSON envelope.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the badge level (`success`, `info`, `warning`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

/// Assert the number of entries in `content.reports`.
pub fn assert_report_count(json: &Value, expected: usize) -> Result<()> {
    let reports = json["content"]["reports"]
        .as_array()
        .context("Expected 'content.reports' array in JSON")?;

    if reports.len() != expected {
        anyhow::bail!("Expected {} reports, got {}", expected, reports.len());
    }

    Ok(())
}

/// Find the task entry for `task` in maintenance output.
pub fn task<'a>(json: &'a Value, task: &str) -> Result<&'a Value> {
    json["content"]["tasks"]
        .as_array()
        .context("Expected 'content.tasks' array in JSON")?
        .iter()
        .find(|t| t["task"] == task)
        .with_context(|| format!("Task {} missing from output", task))
}
