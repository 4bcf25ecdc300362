use std::fmt;

use crate::presentation::formatters::format_count;
use crate::presentation::view_models::{PropertyListViewModel, ViewMode};

// --------------------------------------------------------
// Property List View
// --------------------------------------------------------

pub struct PropertyListView<'a> {
    data: &'a PropertyListViewModel,
    mode: ViewMode,
}

impl<'a> PropertyListView<'a> {
    pub fn new(data: &'a PropertyListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for p in &self.data.properties {
            writeln!(f, "{}", p.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for p in &self.data.properties {
            writeln!(
                f,
                "{}  {} views  {} sessions",
                p.id,
                format_count(p.view_count),
                format_count(p.session_count)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.properties.is_empty() {
            writeln!(f, "No properties found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<24} {:<32} {:>8} {:>9}  CREATED",
            "ID", "TITLE", "VIEWS", "SESSIONS"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for p in &self.data.properties {
            writeln!(
                f,
                "{:<24} {:<32} {:>8} {:>9}  {}",
                p.id,
                truncate(&p.title, 32),
                p.view_count,
                p.session_count,
                if self.mode == ViewMode::Verbose {
                    p.created_at.as_str()
                } else {
                    p.created_at.get(..10).unwrap_or(&p.created_at)
                }
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PropertyListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::PropertyEntryViewModel;

    fn list() -> PropertyListViewModel {
        PropertyListViewModel {
            total: 1,
            properties: vec![PropertyEntryViewModel {
                id: "villa-7".to_string(),
                title: "Seaside villa with a very long marketing title attached".to_string(),
                created_at: "2025-03-01T08:00:00.000Z".to_string(),
                view_count: 3,
                session_count: 3,
            }],
        }
    }

    #[test]
    fn test_minimal_prints_ids_only() {
        let data = list();
        let out = PropertyListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(out, "villa-7\n");
    }

    #[test]
    fn test_standard_truncates_title_and_date() {
        let data = list();
        let out = PropertyListView::new(&data, ViewMode::Standard).to_string();
        assert!(out.contains("Seaside villa with a very lon..."));
        assert!(out.contains("2025-03-01\n"));
        assert!(!out.contains("08:00:00"));
    }
}
