use std::fmt;

use crate::presentation::formatters::{format_percent, format_secs, style};
use crate::presentation::view_models::{
    MetricsViewModel, ReportListViewModel, ReportViewModel, ViewMode, WindowViewModel,
};

// --------------------------------------------------------
// Single Report View
// --------------------------------------------------------

pub struct ReportView<'a> {
    data: &'a ReportViewModel,
    mode: ViewMode,
}

impl<'a> ReportView<'a> {
    pub fn new(data: &'a ReportViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = &self.data.metrics;

        writeln!(
            f,
            "{} {}",
            style::heading(&self.data.property_id),
            style::dim(&format!("({})", self.data.title))
        )?;
        writeln!(f, "Window: {}", describe_window(&self.data.window))?;
        writeln!(f)?;

        writeln!(f, "  {:<18} {}", "Views", m.view_count)?;
        writeln!(
            f,
            "  {:<18} {} ({} completed, {} estimated)",
            "Sessions",
            m.session_count,
            m.breakdown.completed_sessions,
            m.breakdown.estimated_sessions
        )?;
        writeln!(f, "  {:<18} {}", "Avg. time spent", format_secs(m.average_time_spent))?;
        writeln!(f, "  {:<18} {}", "Avg. active time", format_secs(m.average_active_time))?;
        writeln!(
            f,
            "  {:<18} {}",
            "Avg. scroll depth",
            format_percent(m.average_scroll_depth)
        )?;
        writeln!(f, "  {:<18} {}", "Bounce rate", format_percent(m.bounce_rate))?;

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            render_breakdown(f, m)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.property_id),
            ViewMode::Compact => writeln!(f, "{}", compact_line(self.data)),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Report List View
// --------------------------------------------------------

pub struct ReportListView<'a> {
    data: &'a ReportListViewModel,
    mode: ViewMode,
}

impl<'a> ReportListView<'a> {
    pub fn new(data: &'a ReportListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Window: {}", describe_window(&self.data.window))?;
        writeln!(f)?;

        if self.data.reports.is_empty() {
            writeln!(f, "No properties found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<24} {:>7} {:>9} {:>9} {:>9} {:>8} {:>8}",
            "PROPERTY", "VIEWS", "SESSIONS", "AVG TIME", "ACTIVE", "SCROLL", "BOUNCE"
        )?;
        writeln!(f, "{}", "-".repeat(90))?;

        for report in &self.data.reports {
            let m = &report.metrics;
            writeln!(
                f,
                "{:<24} {:>7} {:>9} {:>9} {:>9} {:>8} {:>8}",
                report.property_id,
                m.view_count,
                m.session_count,
                format_secs(m.average_time_spent),
                format_secs(m.average_active_time),
                format_percent(m.average_scroll_depth),
                format_percent(m.bounce_rate)
            )?;

            if self.mode == ViewMode::Verbose {
                render_breakdown(f, m)?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for ReportListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for report in &self.data.reports {
                    writeln!(f, "{}", report.property_id)?;
                }
                Ok(())
            }
            ViewMode::Compact => {
                for report in &self.data.reports {
                    writeln!(f, "{}", compact_line(report))?;
                }
                Ok(())
            }
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Shared pieces
// --------------------------------------------------------

fn compact_line(report: &ReportViewModel) -> String {
    let m = &report.metrics;
    format!(
        "{}  views {}  sessions {}  avg {}  bounce {}",
        report.property_id,
        m.view_count,
        m.session_count,
        format_secs(m.average_time_spent),
        format_percent(m.bounce_rate)
    )
}

fn describe_window(window: &WindowViewModel) -> String {
    match (&window.since, &window.until) {
        (Some(s), Some(u)) => format!("{} to {}", s, u),
        (Some(s), None) => format!("since {}", s),
        (None, Some(u)) => format!("until {}", u),
        (None, None) => "all time".to_string(),
    }
}

fn render_breakdown(f: &mut fmt::Formatter, m: &MetricsViewModel) -> fmt::Result {
    let b = &m.breakdown;
    writeln!(f, "  {}", style::dim("Reconciliation"))?;
    writeln!(
        f,
        "    completed   {} sessions, {}s total",
        b.completed_sessions, b.completed_time_spent_total
    )?;
    writeln!(
        f,
        "    estimated   {} sessions, {}s total ({} clamped)",
        b.estimated_sessions, b.estimated_time_spent_total, b.clamped_sessions
    )?;
    writeln!(
        f,
        "    excluded    {} below floor, {} above ceiling, {} without heartbeat",
        b.excluded_below_floor, b.excluded_above_ceiling, b.missing_heartbeat
    )?;
    writeln!(f, "    bounced     {}", b.bounced_sessions)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwell_engine::ReconcileBreakdown;

    fn report() -> ReportViewModel {
        ReportViewModel {
            property_id: "villa-7".to_string(),
            title: "Villa 7".to_string(),
            window: WindowViewModel {
                since: Some("2025-03-01T00:00:00.000Z".to_string()),
                until: None,
            },
            metrics: MetricsViewModel {
                view_count: 3,
                session_count: 3,
                average_time_spent: 23,
                average_active_time: 20,
                average_scroll_depth: 62.75,
                bounce_rate: 66.67,
                breakdown: ReconcileBreakdown {
                    completed_sessions: 2,
                    completed_time_spent_total: 60,
                    estimated_sessions: 1,
                    estimated_time_spent_total: 10,
                    bounced_sessions: 2,
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn test_compact_line() {
        let data = report();
        let out = ReportView::new(&data, ViewMode::Compact).to_string();
        assert_eq!(out, "villa-7  views 3  sessions 3  avg 23s  bounce 66.67%\n");
    }

    #[test]
    fn test_standard_hides_breakdown_until_verbose() {
        let data = report();

        let standard = ReportView::new(&data, ViewMode::Standard).to_string();
        assert!(standard.contains("since 2025-03-01T00:00:00.000Z"));
        assert!(standard.contains("3 (2 completed, 1 estimated)"));
        assert!(standard.contains("62.75%"));
        assert!(!standard.contains("Reconciliation"));

        let verbose = ReportView::new(&data, ViewMode::Verbose).to_string();
        assert!(verbose.contains("Reconciliation"));
        assert!(verbose.contains("2 sessions, 60s total"));
    }

    #[test]
    fn test_empty_list() {
        let data = ReportListViewModel {
            window: WindowViewModel {
                since: None,
                until: None,
            },
            limit: None,
            reports: Vec::new(),
        };
        let out = ReportListView::new(&data, ViewMode::Standard).to_string();
        assert!(out.contains("all time"));
        assert!(out.contains("No properties found."));
    }
}
