use chrono::{DateTime, Duration, Utc};
use dwell_types::{PropertyId, PropertyTimeSession};
use serde::Serialize;

use crate::{EngagementThresholds, Estimate, estimate_duration};

/// One incomplete session that backfill would finalize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackfillCandidate {
    pub session_id: String,
    pub property_id: PropertyId,
    pub entered_at: DateTime<Utc>,
    pub last_heartbeat: DateTime<Utc>,
    /// Heartbeat span before any clamping.
    pub raw_secs: i64,
    /// Value that will be written to `time_spent`.
    pub effective_secs: i64,
    pub clamped: bool,
}

impl BackfillCandidate {
    pub fn left_at(&self) -> DateTime<Utc> {
        self.entered_at + Duration::seconds(self.effective_secs)
    }
}

/// Why incomplete sessions were left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackfillSkips {
    /// Heartbeat still fresh; the visitor may be on the page.
    pub live: u64,
    pub missing_heartbeat: u64,
    pub below_floor: u64,
    pub above_ceiling: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackfillPlan {
    pub candidates: Vec<BackfillCandidate>,
    pub skipped: BackfillSkips,
}

/// Decide which incomplete sessions can be finalized from their heartbeat.
///
/// Uses the same estimate as reporting, so a session excluded from the
/// metrics is never written and a clamped one is written at the ceiling.
/// Sessions whose last heartbeat is newer than `session_timeout` are live
/// and skipped. Already-finalized sessions are ignored.
pub fn plan_backfill(
    sessions: &[PropertyTimeSession],
    thresholds: &EngagementThresholds,
    now: DateTime<Utc>,
    session_timeout: Duration,
) -> BackfillPlan {
    let mut plan = BackfillPlan::default();

    for session in sessions.iter().filter(|s| s.is_incomplete()) {
        let Some(last_heartbeat) = session.last_heartbeat else {
            plan.skipped.missing_heartbeat += 1;
            continue;
        };

        if now - last_heartbeat < session_timeout {
            plan.skipped.live += 1;
            continue;
        }

        let (raw_secs, effective_secs, clamped) = match estimate_duration(session, thresholds) {
            Estimate::Valid(secs) => (secs, secs, false),
            Estimate::Clamped { raw, effective } => (raw, effective, true),
            Estimate::BelowFloor(_) => {
                plan.skipped.below_floor += 1;
                continue;
            }
            Estimate::AboveCeiling(_) => {
                plan.skipped.above_ceiling += 1;
                continue;
            }
            Estimate::Missing => {
                plan.skipped.missing_heartbeat += 1;
                continue;
            }
        };

        plan.candidates.push(BackfillCandidate {
            session_id: session.id.clone(),
            property_id: session.property_id.clone(),
            entered_at: session.entered_at,
            last_heartbeat,
            raw_secs,
            effective_secs,
            clamped,
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OverCeilingPolicy;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap()
    }

    fn session(id: &str, entered_ago_secs: i64, span: Option<i64>) -> PropertyTimeSession {
        let entered_at = now() - Duration::seconds(entered_ago_secs);
        PropertyTimeSession {
            id: id.to_string(),
            property_id: PropertyId::from("p"),
            session_key: id.to_string(),
            entered_at,
            last_heartbeat: span.map(|s| entered_at + Duration::seconds(s)),
            left_at: None,
            time_spent: None,
            active_time: None,
            scroll_depth: None,
        }
    }

    fn timeout() -> Duration {
        Duration::minutes(30)
    }

    #[test]
    fn test_plans_stale_valid_sessions() {
        let sessions = vec![session("a", 86_400, Some(120))];
        let plan = plan_backfill(&sessions, &EngagementThresholds::default(), now(), timeout());

        assert_eq!(plan.candidates.len(), 1);
        let c = &plan.candidates[0];
        assert_eq!(c.effective_secs, 120);
        assert!(!c.clamped);
        assert_eq!(c.left_at(), c.entered_at + Duration::seconds(120));
    }

    #[test]
    fn test_skips_live_sessions() {
        // Heartbeat 60s ago
        let sessions = vec![session("a", 180, Some(120))];
        let plan = plan_backfill(&sessions, &EngagementThresholds::default(), now(), timeout());

        assert!(plan.candidates.is_empty());
        assert_eq!(plan.skipped.live, 1);
    }

    #[test]
    fn test_policy_matches_reporting() {
        let sessions = vec![session("a", 86_400, Some(3601))];

        let discard = plan_backfill(&sessions, &EngagementThresholds::default(), now(), timeout());
        assert!(discard.candidates.is_empty());
        assert_eq!(discard.skipped.above_ceiling, 1);

        let clamp_thresholds = EngagementThresholds::default().with_policy(OverCeilingPolicy::Clamp);
        let clamp = plan_backfill(&sessions, &clamp_thresholds, now(), timeout());
        assert_eq!(clamp.candidates.len(), 1);
        assert_eq!(clamp.candidates[0].raw_secs, 3601);
        assert_eq!(clamp.candidates[0].effective_secs, 3600);
        assert!(clamp.candidates[0].clamped);
    }

    #[test]
    fn test_ignores_completed_and_counts_skips() {
        let mut done = session("done", 86_400, Some(50));
        done.time_spent = Some(50);

        let sessions = vec![
            done,
            session("short", 86_400, Some(4)),
            session("nobeat", 86_400, None),
        ];
        let plan = plan_backfill(&sessions, &EngagementThresholds::default(), now(), timeout());

        assert!(plan.candidates.is_empty());
        assert_eq!(plan.skipped.below_floor, 1);
        assert_eq!(plan.skipped.missing_heartbeat, 1);
        assert_eq!(plan.skipped.live, 0);
    }
}
