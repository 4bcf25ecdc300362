use crate::args::hints::fmt;
use crate::presentation::view_models::{
    BackfillRowViewModel, BackfillTaskViewModel, CleanupTaskViewModel, CommandResultViewModel,
    FindingViewModel, Guidance, MaintenanceViewModel, StatusBadge, TaskViewModel,
};
use dwell_engine::{BackfillPlan, FindingSummary};
use dwell_runtime::{CleanupFindings, MaintenanceMode, MaintenanceReport, TaskReport};
use dwell_types::format_timestamp;

pub fn present_maintenance_report(
    report: MaintenanceReport,
    task_arg: &str,
) -> CommandResultViewModel<MaintenanceViewModel> {
    let total_candidates = report.total_candidates();
    let total_changed = report.total_changed();
    let property = report.property.as_ref().map(|p| p.to_string());

    let badge = match report.mode {
        MaintenanceMode::DryRun if total_candidates == 0 => StatusBadge::success("Nothing to do"),
        MaintenanceMode::DryRun => {
            StatusBadge::warning(format!("Dry run: {} rows would change", total_candidates))
        }
        MaintenanceMode::Execute => StatusBadge::success(format!("Changed {} rows", total_changed)),
    };

    let content = MaintenanceViewModel {
        mode: report.mode,
        property: property.clone(),
        total_candidates,
        total_changed,
        tasks: report.tasks.into_iter().map(task_view_model).collect(),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if report.mode == MaintenanceMode::DryRun && total_candidates > 0 {
        result = result.with_suggestion(
            Guidance::new("Apply these changes")
                .with_command(fmt::maintain_execute(task_arg, property.as_deref())),
        );
    }

    result
}

fn task_view_model(report: TaskReport) -> TaskViewModel {
    TaskViewModel {
        task: report.task,
        candidates: report.candidates,
        changed: report.changed,
        backfill: report.backfill.map(backfill_view_model),
        cleanup: report.cleanup.map(cleanup_view_model),
    }
}

fn backfill_view_model(plan: BackfillPlan) -> BackfillTaskViewModel {
    let sessions = plan
        .candidates
        .into_iter()
        .map(|c| BackfillRowViewModel {
            left_at: format_timestamp(&c.left_at()),
            session_id: c.session_id,
            property_id: c.property_id.to_string(),
            entered_at: format_timestamp(&c.entered_at),
            last_heartbeat: format_timestamp(&c.last_heartbeat),
            estimated_secs: c.raw_secs,
            time_spent: c.effective_secs,
            clamped: c.clamped,
        })
        .collect();

    BackfillTaskViewModel {
        sessions,
        skipped: plan.skipped,
    }
}

fn cleanup_view_model(findings: CleanupFindings) -> CleanupTaskViewModel {
    CleanupTaskViewModel {
        session_ids: findings.session_ids,
        view_ids: findings.view_ids,
        sessions: findings.sessions.into_iter().map(finding_view_model).collect(),
        views: findings.views.into_iter().map(finding_view_model).collect(),
    }
}

fn finding_view_model(summary: FindingSummary) -> FindingViewModel {
    FindingViewModel {
        property_id: summary.property_id.to_string(),
        rows: summary.rows,
        earliest: format_timestamp(&summary.earliest),
        latest: format_timestamp(&summary.latest),
    }
}
