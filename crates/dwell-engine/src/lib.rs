// Engine module - Core reconciliation logic (estimation, blending, backfill planning)
// This layer sits between stored rows (index) and the services/CLI

pub mod backfill;
pub mod estimate;
pub mod hygiene;
pub mod reconcile;
mod thresholds;

pub use backfill::{BackfillCandidate, BackfillPlan, BackfillSkips, plan_backfill};
pub use estimate::{Estimate, estimate_duration};
pub use hygiene::{FindingSummary, summarize_findings};
pub use reconcile::{EngagementMetrics, ReconcileBreakdown, SessionAnalyticsReconciler};
pub use thresholds::{EngagementThresholds, OverCeilingPolicy};
