use dwell_types::PropertyTimeSession;

use crate::{EngagementThresholds, OverCeilingPolicy};

/// Outcome of estimating an incomplete session's duration from its heartbeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// No heartbeat was ever recorded.
    Missing,
    /// Span is shorter than the engagement floor.
    BelowFloor(i64),
    /// Span exceeds the ceiling and the policy discards it.
    AboveCeiling(i64),
    /// Span exceeded the ceiling and was clamped to it.
    Clamped { raw: i64, effective: i64 },
    /// Span is within bounds.
    Valid(i64),
}

/// Estimate `last_heartbeat - entered_at` for a session lacking `time_spent`.
///
/// Both bounds are inclusive: exactly the floor or exactly the ceiling is valid.
pub fn estimate_duration(
    session: &PropertyTimeSession,
    thresholds: &EngagementThresholds,
) -> Estimate {
    let Some(raw) = session.heartbeat_span_secs() else {
        return Estimate::Missing;
    };

    if raw < thresholds.min_engagement_secs {
        return Estimate::BelowFloor(raw);
    }

    if raw > thresholds.max_session_secs {
        return match thresholds.over_ceiling {
            OverCeilingPolicy::Discard => Estimate::AboveCeiling(raw),
            OverCeilingPolicy::Clamp => Estimate::Clamped {
                raw,
                effective: thresholds.max_session_secs,
            },
        };
    }

    Estimate::Valid(raw)
}
