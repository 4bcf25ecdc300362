use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MetricsViewModel, ReportListViewModel, ReportViewModel,
    StatusBadge, WindowViewModel,
};
use dwell_engine::EngagementMetrics;
use dwell_runtime::PropertyReport;
use dwell_types::{ReportWindow, format_timestamp};

pub fn present_report(report: PropertyReport) -> CommandResultViewModel<ReportViewModel> {
    let content = report_view_model(report);
    let breakdown = &content.metrics.breakdown;

    let badge = if content.metrics.session_count == 0 {
        StatusBadge::info("No valid sessions in this window")
    } else if breakdown.missing_heartbeat > 0 {
        StatusBadge::warning(format!(
            "{} incomplete sessions have no heartbeat and were excluded",
            breakdown.missing_heartbeat
        ))
    } else {
        StatusBadge::success(format!("{} valid sessions", content.metrics.session_count))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    // Estimated sessions can be finalized once their heartbeat goes stale.
    if result.content.metrics.breakdown.estimated_sessions > 0 {
        let guide = Guidance::new(format!(
            "{} sessions were estimated from heartbeats; preview the backfill",
            result.content.metrics.breakdown.estimated_sessions
        ))
        .with_command(fmt::maintain_dry_run(
            "backfill",
            Some(&result.content.property_id),
        ));
        result = result.with_suggestion(guide);
    }

    result
}

pub fn present_report_list(
    reports: Vec<PropertyReport>,
    window: &ReportWindow,
    limit: Option<usize>,
) -> CommandResultViewModel<ReportListViewModel> {
    let content = ReportListViewModel {
        window: window_view_model(window),
        limit,
        reports: reports.into_iter().map(report_view_model).collect(),
    };

    if content.reports.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No properties tracked yet"))
            .with_suggestion(Guidance::new("Check the data directory").with_command(cmd::INIT));
    }

    let mut result = CommandResultViewModel::new(content);
    if let Some(top) = result.content.reports.first() {
        let guide = Guidance::new("Drill into the busiest property")
            .with_command(fmt::report_show(&top.property_id));
        result = result.with_suggestion(guide);
    }

    result
}

fn report_view_model(report: PropertyReport) -> ReportViewModel {
    ReportViewModel {
        property_id: report.property.id.to_string(),
        title: report.property.title,
        window: window_view_model(&report.window),
        metrics: metrics_view_model(report.metrics),
    }
}

fn metrics_view_model(metrics: EngagementMetrics) -> MetricsViewModel {
    MetricsViewModel {
        view_count: metrics.view_count,
        session_count: metrics.session_count,
        average_time_spent: metrics.average_time_spent,
        average_active_time: metrics.average_active_time,
        average_scroll_depth: metrics.average_scroll_depth,
        bounce_rate: metrics.bounce_rate,
        breakdown: metrics.breakdown,
    }
}

fn window_view_model(window: &ReportWindow) -> WindowViewModel {
    WindowViewModel {
        since: window.since.as_ref().map(format_timestamp),
        until: window.until.as_ref().map(format_timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use chrono::{TimeZone, Utc};
    use dwell_engine::ReconcileBreakdown;
    use dwell_types::{Property, PropertyId};

    fn report(id: &str, session_count: u64, breakdown: ReconcileBreakdown) -> PropertyReport {
        let property_id = PropertyId::from(id);
        let mut metrics = EngagementMetrics::empty(property_id.clone(), 3);
        metrics.session_count = session_count;
        metrics.average_time_spent = 23;
        metrics.bounce_rate = 66.67;
        metrics.breakdown = breakdown;

        PropertyReport {
            property: Property {
                id: property_id,
                title: "Villa".to_string(),
                created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            },
            window: ReportWindow::all(),
            metrics,
        }
    }

    #[test]
    fn test_report_suggests_backfill_for_estimated_sessions() {
        let breakdown = ReconcileBreakdown {
            completed_sessions: 2,
            estimated_sessions: 1,
            ..Default::default()
        };
        let result = present_report(report("villa-7", 3, breakdown));

        assert_eq!(result.badge.unwrap().level, StatusLevel::Success);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("dwell maintain --task backfill --property villa-7 --dry-run")
        );
        assert_eq!(result.content.metrics.average_time_spent, 23);
    }

    #[test]
    fn test_report_warns_about_missing_heartbeats() {
        let breakdown = ReconcileBreakdown {
            completed_sessions: 1,
            missing_heartbeat: 2,
            ..Default::default()
        };
        let result = present_report(report("villa-7", 1, breakdown));
        assert_eq!(result.badge.unwrap().level, StatusLevel::Warning);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_report_is_info() {
        let result = present_report(report("villa-7", 0, ReconcileBreakdown::default()));
        assert_eq!(result.badge.unwrap().level, StatusLevel::Info);
    }

    #[test]
    fn test_window_is_rendered_as_rfc3339() {
        let window = ReportWindow::parse(Some("2025-03-01"), None).unwrap();
        let vm = window_view_model(&window);
        assert_eq!(vm.since.as_deref(), Some("2025-03-01T00:00:00.000Z"));
        assert!(vm.until.is_none());
    }
}
