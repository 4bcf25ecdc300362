use dwell_engine::{EngagementMetrics, SessionAnalyticsReconciler};
use dwell_index::Database;
use dwell_types::{Property, PropertyId, ReportWindow};
use serde::Serialize;

use crate::{Error, Result};

/// Metrics for one property together with what they were computed over.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyReport {
    pub property: Property,
    pub window: ReportWindow,
    pub metrics: EngagementMetrics,
}

/// Read-only engagement reporting over an injected database handle.
pub struct ReportService<'a> {
    db: &'a Database,
    reconciler: SessionAnalyticsReconciler,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a Database, reconciler: SessionAnalyticsReconciler) -> Self {
        Self { db, reconciler }
    }

    pub fn property_report(
        &self,
        property_id: &PropertyId,
        window: &ReportWindow,
    ) -> Result<PropertyReport> {
        let property = self
            .db
            .get_property(property_id)?
            .ok_or_else(|| Error::NotFound(format!("Property not found: {}", property_id)))?;

        self.report_for(property, window)
    }

    /// Every property, busiest first (views, then average time spent).
    pub fn list_reports(
        &self,
        window: &ReportWindow,
        limit: Option<usize>,
    ) -> Result<Vec<PropertyReport>> {
        let mut reports = self
            .db
            .list_properties()?
            .into_iter()
            .map(|property| self.report_for(property, window))
            .collect::<Result<Vec<_>>>()?;

        reports.sort_by(|a, b| {
            b.metrics
                .view_count
                .cmp(&a.metrics.view_count)
                .then(b.metrics.average_time_spent.cmp(&a.metrics.average_time_spent))
                .then(a.property.id.cmp(&b.property.id))
        });

        if let Some(limit) = limit {
            reports.truncate(limit);
        }

        Ok(reports)
    }

    fn report_for(&self, property: Property, window: &ReportWindow) -> Result<PropertyReport> {
        let sessions = self.db.list_sessions(&property.id, window)?;
        let view_count = self.db.count_views(&property.id, window)?;
        let metrics = self.reconciler.reconcile(&property.id, &sessions, view_count);

        tracing::debug!(
            property = %property.id,
            sessions = sessions.len(),
            views = view_count,
            counted = metrics.session_count,
            "reconciled property engagement"
        );

        Ok(PropertyReport {
            property,
            window: *window,
            metrics,
        })
    }
}
