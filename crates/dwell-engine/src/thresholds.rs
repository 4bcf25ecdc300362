use serde::{Deserialize, Serialize};

/// What to do with a heartbeat estimate above the session ceiling.
///
/// Chosen once in configuration and shared by reporting and backfill so the
/// two never disagree about the same session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverCeilingPolicy {
    /// Treat the session as an abandoned tab and leave it out.
    #[default]
    Discard,
    /// Keep the session at the ceiling value.
    Clamp,
}

/// Duration bounds used when estimating and classifying sessions (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementThresholds {
    /// Estimates below this are load-bounces/noise. Inclusive lower bound.
    pub min_engagement_secs: i64,
    /// Estimates above this are never-closed tabs. Inclusive upper bound.
    pub max_session_secs: i64,
    /// Effective durations strictly below this count as a bounce.
    pub bounce_threshold_secs: i64,
    pub over_ceiling: OverCeilingPolicy,
}

impl Default for EngagementThresholds {
    fn default() -> Self {
        Self {
            min_engagement_secs: 5,
            max_session_secs: 3600,
            bounce_threshold_secs: 30,
            over_ceiling: OverCeilingPolicy::Discard,
        }
    }
}

impl EngagementThresholds {
    pub fn with_policy(mut self, policy: OverCeilingPolicy) -> Self {
        self.over_ceiling = policy;
        self
    }
}
