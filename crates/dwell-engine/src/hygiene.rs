use chrono::{DateTime, Utc};
use dwell_types::PropertyId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-property rollup of rows flagged by a maintenance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingSummary {
    pub property_id: PropertyId,
    pub rows: u64,
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

/// Group flagged rows `(property, timestamp)` by property, ordered by id.
pub fn summarize_findings<I>(rows: I) -> Vec<FindingSummary>
where
    I: IntoIterator<Item = (PropertyId, DateTime<Utc>)>,
{
    let mut grouped: BTreeMap<PropertyId, FindingSummary> = BTreeMap::new();

    for (property_id, ts) in rows {
        grouped
            .entry(property_id.clone())
            .and_modify(|summary| {
                summary.rows += 1;
                summary.earliest = summary.earliest.min(ts);
                summary.latest = summary.latest.max(ts);
            })
            .or_insert(FindingSummary {
                property_id,
                rows: 1,
                earliest: ts,
                latest: ts,
            });
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_groups_by_property() {
        let t = |d| Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap();
        let rows = vec![
            (PropertyId::from("b"), t(3)),
            (PropertyId::from("a"), t(5)),
            (PropertyId::from("b"), t(1)),
        ];

        let summaries = summarize_findings(rows);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].property_id.as_str(), "a");
        assert_eq!(summaries[1].rows, 2);
        assert_eq!(summaries[1].earliest, t(1));
        assert_eq!(summaries[1].latest, t(3));
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize_findings(Vec::new()).is_empty());
    }
}
