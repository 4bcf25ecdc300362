use dwell_types::{PropertyId, PropertyTimeSession, round_to};
use serde::Serialize;

use crate::{EngagementThresholds, Estimate, estimate_duration};

/// Blended engagement for one property over a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementMetrics {
    pub property_id: PropertyId,
    /// `PropertyView` rows in the window, independent of sessions.
    pub view_count: u64,
    /// Sessions that took part in the averages (completed + valid estimated).
    pub session_count: u64,
    /// Seconds, rounded.
    pub average_time_spent: u64,
    /// Seconds, rounded.
    pub average_active_time: u64,
    /// 0-100, two decimals.
    pub average_scroll_depth: f64,
    /// Percent of counted sessions under the bounce threshold, two decimals.
    pub bounce_rate: f64,
    pub breakdown: ReconcileBreakdown,
}

/// How the input sessions were treated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileBreakdown {
    pub completed_sessions: u64,
    pub completed_time_spent_total: i64,
    pub estimated_sessions: u64,
    pub estimated_time_spent_total: i64,
    /// Subset of `estimated_sessions` kept at the ceiling.
    pub clamped_sessions: u64,
    pub excluded_below_floor: u64,
    pub excluded_above_ceiling: u64,
    pub missing_heartbeat: u64,
    pub bounced_sessions: u64,
}

impl EngagementMetrics {
    pub fn empty(property_id: PropertyId, view_count: u64) -> Self {
        Self {
            property_id,
            view_count,
            session_count: 0,
            average_time_spent: 0,
            average_active_time: 0,
            average_scroll_depth: 0.0,
            bounce_rate: 0.0,
            breakdown: ReconcileBreakdown::default(),
        }
    }
}

#[derive(Default)]
struct Accumulator {
    time_total: i64,
    time_count: u64,
    active_total: i64,
    active_count: u64,
    scroll_total: f64,
    scroll_count: u64,
    bounced: u64,
}

impl Accumulator {
    fn add(&mut self, effective: i64, active: Option<i64>, scroll: Option<f64>, bounce_below: i64) {
        self.time_total = self.time_total.saturating_add(effective);
        self.time_count += 1;

        if let Some(active) = active {
            self.active_total = self.active_total.saturating_add(active);
            self.active_count += 1;
        }

        if let Some(depth) = scroll {
            self.scroll_total += depth.clamp(0.0, 100.0);
            self.scroll_count += 1;
        }

        if effective < bounce_below {
            self.bounced += 1;
        }
    }

    /// A heartbeat-reported active time never exceeds the estimated span.
    fn add_estimated(&mut self, session: &PropertyTimeSession, effective: i64, bounce_below: i64) {
        let active = session.active_time.unwrap_or(effective).min(effective);
        self.add(effective, Some(active), session.scroll_depth, bounce_below);
    }
}

/// Computes blended engagement metrics from a property's session rows.
///
/// Completed sessions (finalized `time_spent`) are taken as recorded.
/// Incomplete sessions are estimated from their last heartbeat and kept
/// only when the estimate falls inside the configured bounds. Read-only and
/// deterministic for the same input.
#[derive(Debug, Clone, Default)]
pub struct SessionAnalyticsReconciler {
    thresholds: EngagementThresholds,
}

impl SessionAnalyticsReconciler {
    pub fn new(thresholds: EngagementThresholds) -> Self {
        Self { thresholds }
    }

    pub fn reconcile(
        &self,
        property_id: &PropertyId,
        sessions: &[PropertyTimeSession],
        view_count: u64,
    ) -> EngagementMetrics {
        let bounce_below = self.thresholds.bounce_threshold_secs;
        let mut acc = Accumulator::default();
        let mut breakdown = ReconcileBreakdown::default();

        for session in sessions {
            if let Some(time_spent) = session.time_spent {
                breakdown.completed_sessions += 1;
                breakdown.completed_time_spent_total =
                    breakdown.completed_time_spent_total.saturating_add(time_spent);
                acc.add(
                    time_spent,
                    session.active_time,
                    session.scroll_depth,
                    bounce_below,
                );
                continue;
            }

            match estimate_duration(session, &self.thresholds) {
                Estimate::Missing => breakdown.missing_heartbeat += 1,
                Estimate::BelowFloor(_) => breakdown.excluded_below_floor += 1,
                Estimate::AboveCeiling(_) => breakdown.excluded_above_ceiling += 1,
                Estimate::Valid(effective) => {
                    breakdown.estimated_sessions += 1;
                    breakdown.estimated_time_spent_total += effective;
                    acc.add_estimated(session, effective, bounce_below);
                }
                Estimate::Clamped { effective, .. } => {
                    breakdown.clamped_sessions += 1;
                    breakdown.estimated_sessions += 1;
                    breakdown.estimated_time_spent_total += effective;
                    acc.add_estimated(session, effective, bounce_below);
                }
            }
        }

        breakdown.bounced_sessions = acc.bounced;

        if acc.time_count == 0 {
            return EngagementMetrics {
                breakdown,
                ..EngagementMetrics::empty(property_id.clone(), view_count)
            };
        }

        EngagementMetrics {
            property_id: property_id.clone(),
            view_count,
            session_count: acc.time_count,
            average_time_spent: rounded_average(acc.time_total as f64, acc.time_count),
            average_active_time: rounded_average(acc.active_total as f64, acc.active_count),
            average_scroll_depth: average(acc.scroll_total, acc.scroll_count, 2),
            bounce_rate: round_to(acc.bounced as f64 / acc.time_count as f64 * 100.0, 2),
            breakdown,
        }
    }
}

fn average(total: f64, count: u64, places: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(total / count as f64, places)
}

fn rounded_average(total: f64, count: u64) -> u64 {
    average(total, count, 0).max(0.0) as u64
}
