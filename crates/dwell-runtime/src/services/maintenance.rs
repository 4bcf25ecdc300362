use chrono::{DateTime, Duration, Utc};
use dwell_engine::{
    BackfillPlan, EngagementThresholds, FindingSummary, plan_backfill, summarize_findings,
};
use dwell_index::{BackfillWrite, Database};
use dwell_types::{PropertyId, PropertyTimeSession, PropertyView};
use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceMode {
    DryRun,
    Execute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceTask {
    /// Delete views/sessions whose property no longer exists.
    Orphans,
    /// Delete views/sessions timestamped before their property was created.
    Antedated,
    /// Persist heartbeat estimates onto abandoned sessions.
    Backfill,
}

impl MaintenanceTask {
    /// Execution order for a full run: cleanup first so backfill never
    /// writes rows that are about to be deleted.
    pub fn all() -> Vec<MaintenanceTask> {
        vec![
            MaintenanceTask::Orphans,
            MaintenanceTask::Antedated,
            MaintenanceTask::Backfill,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct MaintenanceRequest {
    pub tasks: Vec<MaintenanceTask>,
    pub property: Option<PropertyId>,
    pub mode: MaintenanceMode,
    pub now: DateTime<Utc>,
}

/// Rows flagged by a cleanup task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupFindings {
    pub session_ids: Vec<String>,
    pub view_ids: Vec<String>,
    pub sessions: Vec<FindingSummary>,
    pub views: Vec<FindingSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub task: MaintenanceTask,
    /// Rows the task would change.
    pub candidates: u64,
    /// Rows actually changed (always 0 for dry runs).
    pub changed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill: Option<BackfillPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<CleanupFindings>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceReport {
    pub mode: MaintenanceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyId>,
    pub tasks: Vec<TaskReport>,
}

impl MaintenanceReport {
    pub fn total_candidates(&self) -> u64 {
        self.tasks.iter().map(|t| t.candidates).sum()
    }

    pub fn total_changed(&self) -> u64 {
        self.tasks.iter().map(|t| t.changed).sum()
    }
}

/// Data-hygiene and backfill operations behind a single entry point.
///
/// Every write is guarded (`time_spent IS NULL` for backfill, id lists for
/// deletes) and each task runs in its own transaction, so rerunning the same
/// request is safe.
pub struct MaintenanceService<'a> {
    db: &'a Database,
    thresholds: EngagementThresholds,
    session_timeout: Duration,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(
        db: &'a Database,
        thresholds: EngagementThresholds,
        session_timeout: Duration,
    ) -> Self {
        Self {
            db,
            thresholds,
            session_timeout,
        }
    }

    pub fn run(&self, request: &MaintenanceRequest) -> Result<MaintenanceReport> {
        let mut tasks = Vec::with_capacity(request.tasks.len());

        for task in &request.tasks {
            let report = match task {
                MaintenanceTask::Orphans => self.cleanup(
                    *task,
                    self.db.find_orphaned_sessions(request.property.as_ref())?,
                    self.db.find_orphaned_views(request.property.as_ref())?,
                    request.mode,
                )?,
                MaintenanceTask::Antedated => self.cleanup(
                    *task,
                    self.db.find_antedated_sessions(request.property.as_ref())?,
                    self.db.find_antedated_views(request.property.as_ref())?,
                    request.mode,
                )?,
                MaintenanceTask::Backfill => self.backfill(request)?,
            };

            tracing::info!(
                task = ?report.task,
                mode = ?request.mode,
                candidates = report.candidates,
                changed = report.changed,
                "maintenance task finished"
            );
            tasks.push(report);
        }

        Ok(MaintenanceReport {
            mode: request.mode,
            property: request.property.clone(),
            tasks,
        })
    }

    fn cleanup(
        &self,
        task: MaintenanceTask,
        sessions: Vec<PropertyTimeSession>,
        views: Vec<PropertyView>,
        mode: MaintenanceMode,
    ) -> Result<TaskReport> {
        let findings = CleanupFindings {
            session_ids: sessions.iter().map(|s| s.id.clone()).collect(),
            view_ids: views.iter().map(|v| v.id.clone()).collect(),
            sessions: summarize_findings(
                sessions
                    .into_iter()
                    .map(|s| (s.property_id, s.entered_at)),
            ),
            views: summarize_findings(views.into_iter().map(|v| (v.property_id, v.viewed_at))),
        };
        let candidates = (findings.session_ids.len() + findings.view_ids.len()) as u64;

        if candidates > 0 && mode == MaintenanceMode::DryRun {
            tracing::warn!(
                task = ?task,
                sessions = findings.session_ids.len(),
                views = findings.view_ids.len(),
                "data hygiene findings (dry run, nothing deleted)"
            );
        }

        let changed = match mode {
            MaintenanceMode::DryRun => 0,
            MaintenanceMode::Execute => self
                .db
                .delete_rows(&findings.session_ids, &findings.view_ids)?
                as u64,
        };

        Ok(TaskReport {
            task,
            candidates,
            changed,
            backfill: None,
            cleanup: Some(findings),
        })
    }

    fn backfill(&self, request: &MaintenanceRequest) -> Result<TaskReport> {
        let incomplete = self
            .db
            .list_incomplete_sessions(request.property.as_ref())?;
        let plan = plan_backfill(
            &incomplete,
            &self.thresholds,
            request.now,
            self.session_timeout,
        );

        let changed = match request.mode {
            MaintenanceMode::DryRun => 0,
            MaintenanceMode::Execute => {
                let writes: Vec<BackfillWrite> = plan
                    .candidates
                    .iter()
                    .map(|c| BackfillWrite {
                        session_id: c.session_id.clone(),
                        time_spent: c.effective_secs,
                        left_at: c.left_at(),
                    })
                    .collect();
                self.db.apply_backfill(&writes)? as u64
            }
        };

        Ok(TaskReport {
            task: MaintenanceTask::Backfill,
            candidates: plan.candidates.len() as u64,
            changed,
            backfill: Some(plan),
            cleanup: None,
        })
    }
}
