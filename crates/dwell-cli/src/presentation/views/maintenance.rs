use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{
    BackfillTaskViewModel, CleanupTaskViewModel, FindingViewModel, MaintenanceViewModel,
    TaskViewModel, ViewMode,
};
use dwell_runtime::{MaintenanceMode, MaintenanceTask};

pub struct MaintenanceView<'a> {
    data: &'a MaintenanceViewModel,
    mode: ViewMode,
}

impl<'a> MaintenanceView<'a> {
    pub fn new(data: &'a MaintenanceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for task in &self.data.tasks {
            if let Some(backfill) = &task.backfill {
                for row in &backfill.sessions {
                    writeln!(f, "{}", row.session_id)?;
                }
            }
            if let Some(cleanup) = &task.cleanup {
                for id in cleanup.session_ids.iter().chain(&cleanup.view_ids) {
                    writeln!(f, "{}", id)?;
                }
            }
        }
        Ok(())
    }

    fn render_task(&self, f: &mut fmt::Formatter, task: &TaskViewModel) -> fmt::Result {
        let counts = match self.data.mode {
            MaintenanceMode::DryRun => format!("{} candidates", task.candidates),
            MaintenanceMode::Execute => {
                format!("{} candidates, {} changed", task.candidates, task.changed)
            }
        };
        let counts = if task.candidates == 0 {
            style::good(&counts)
        } else {
            style::caution(&counts)
        };

        writeln!(f, "{:<10} {}", task_name(task.task), counts)?;

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        if let Some(backfill) = &task.backfill {
            self.render_backfill(f, backfill)?;
        }
        if let Some(cleanup) = &task.cleanup {
            render_cleanup(f, cleanup)?;
        }

        Ok(())
    }

    fn render_backfill(&self, f: &mut fmt::Formatter, backfill: &BackfillTaskViewModel) -> fmt::Result {
        for row in &backfill.sessions {
            let clamp_note = if row.clamped {
                format!(" (clamped from {}s)", row.estimated_secs)
            } else {
                String::new()
            };

            if self.mode == ViewMode::Verbose {
                writeln!(
                    f,
                    "  {}  {}  entered {}  heartbeat {}  -> {}s, left {}{}",
                    row.session_id,
                    row.property_id,
                    row.entered_at,
                    row.last_heartbeat,
                    row.time_spent,
                    row.left_at,
                    clamp_note
                )?;
            } else {
                writeln!(
                    f,
                    "  {}  {}  -> {}s{}",
                    row.session_id, row.property_id, row.time_spent, clamp_note
                )?;
            }
        }

        let s = &backfill.skipped;
        let skipped = s.live + s.missing_heartbeat + s.below_floor + s.above_ceiling;
        if skipped > 0 {
            writeln!(
                f,
                "  {}",
                style::dim(&format!(
                    "skipped: {} live, {} without heartbeat, {} below floor, {} above ceiling",
                    s.live, s.missing_heartbeat, s.below_floor, s.above_ceiling
                ))
            )?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for MaintenanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return self.render_minimal(f);
        }

        let mode = match self.data.mode {
            MaintenanceMode::DryRun => "dry run",
            MaintenanceMode::Execute => "execute",
        };
        let scope = self.data.property.as_deref().unwrap_or("all properties");
        writeln!(f, "Mode: {}  Scope: {}", mode, scope)?;
        writeln!(f)?;

        for task in &self.data.tasks {
            self.render_task(f, task)?;
        }

        Ok(())
    }
}

fn render_cleanup(f: &mut fmt::Formatter, cleanup: &CleanupTaskViewModel) -> fmt::Result {
    for finding in &cleanup.sessions {
        render_finding(f, "sessions", finding)?;
    }
    for finding in &cleanup.views {
        render_finding(f, "views", finding)?;
    }
    Ok(())
}

fn render_finding(f: &mut fmt::Formatter, kind: &str, finding: &FindingViewModel) -> fmt::Result {
    writeln!(
        f,
        "  {:<24} {:>5} {:<8} {} .. {}",
        finding.property_id, finding.rows, kind, finding.earliest, finding.latest
    )
}

fn task_name(task: MaintenanceTask) -> &'static str {
    match task {
        MaintenanceTask::Orphans => "orphans",
        MaintenanceTask::Antedated => "antedated",
        MaintenanceTask::Backfill => "backfill",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::BackfillRowViewModel;
    use dwell_engine::BackfillSkips;

    fn data(mode: MaintenanceMode) -> MaintenanceViewModel {
        MaintenanceViewModel {
            mode,
            property: None,
            total_candidates: 2,
            total_changed: 0,
            tasks: vec![
                TaskViewModel {
                    task: MaintenanceTask::Antedated,
                    candidates: 1,
                    changed: 0,
                    backfill: None,
                    cleanup: Some(CleanupTaskViewModel {
                        session_ids: vec!["s-old".to_string()],
                        view_ids: Vec::new(),
                        sessions: vec![FindingViewModel {
                            property_id: "villa-7".to_string(),
                            rows: 1,
                            earliest: "2025-02-01T00:00:00.000Z".to_string(),
                            latest: "2025-02-01T00:00:00.000Z".to_string(),
                        }],
                        views: Vec::new(),
                    }),
                },
                TaskViewModel {
                    task: MaintenanceTask::Backfill,
                    candidates: 1,
                    changed: 0,
                    backfill: Some(BackfillTaskViewModel {
                        sessions: vec![BackfillRowViewModel {
                            session_id: "s-1".to_string(),
                            property_id: "villa-7".to_string(),
                            entered_at: "2025-03-02T08:00:00.000Z".to_string(),
                            last_heartbeat: "2025-03-02T08:00:10.000Z".to_string(),
                            estimated_secs: 10,
                            time_spent: 10,
                            left_at: "2025-03-02T08:00:10.000Z".to_string(),
                            clamped: false,
                        }],
                        skipped: BackfillSkips {
                            live: 1,
                            ..Default::default()
                        },
                    }),
                    cleanup: None,
                },
            ],
        }
    }

    #[test]
    fn test_minimal_lists_affected_ids() {
        let vm = data(MaintenanceMode::DryRun);
        let out = MaintenanceView::new(&vm, ViewMode::Minimal).to_string();
        assert_eq!(out, "s-old\ns-1\n");
    }

    #[test]
    fn test_standard_shows_rows_and_skips() {
        let vm = data(MaintenanceMode::DryRun);
        let out = MaintenanceView::new(&vm, ViewMode::Standard).to_string();
        assert!(out.starts_with("Mode: dry run  Scope: all properties"));
        assert!(out.contains("s-1  villa-7  -> 10s"));
        assert!(out.contains("1 live"));
        assert!(out.contains("2025-02-01T00:00:00.000Z"));
    }

    #[test]
    fn test_compact_shows_task_lines_only() {
        let vm = data(MaintenanceMode::Execute);
        let out = MaintenanceView::new(&vm, ViewMode::Compact).to_string();
        assert!(out.contains("1 candidates, 0 changed"));
        assert!(!out.contains("s-1"));
    }
}
