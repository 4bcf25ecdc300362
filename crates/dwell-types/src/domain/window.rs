use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, parse_timestamp};

/// Half-open reporting window `[since, until)`. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl ReportWindow {
    /// Unbounded window covering all rows
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(s), Some(u)) = (since, until)
            && s >= u
        {
            return Err(Error::InvalidWindow(format!(
                "since ({}) must be earlier than until ({})",
                s.to_rfc3339(),
                u.to_rfc3339()
            )));
        }
        Ok(Self { since, until })
    }

    /// Build a window from optional CLI strings
    pub fn parse(since: Option<&str>, until: Option<&str>) -> Result<Self> {
        let since = since.map(parse_timestamp).transpose()?;
        let until = until.map(parse_timestamp).transpose()?;
        Self::new(since, until)
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.since.is_none_or(|s| ts >= s) && self.until.is_none_or(|u| ts < u)
    }

    pub fn is_bounded(&self) -> bool {
        self.since.is_some() || self.until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_is_half_open() {
        let window = ReportWindow::parse(Some("2025-03-01"), Some("2025-03-02")).unwrap();

        assert!(window.contains(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2025, 3, 1, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_window_rejects_reversed_bounds() {
        let err = ReportWindow::parse(Some("2025-03-02"), Some("2025-03-01")).unwrap_err();
        assert!(err.to_string().contains("must be earlier"));
    }

    #[test]
    fn test_open_window_contains_everything() {
        let window = ReportWindow::all();
        assert!(!window.is_bounded());
        assert!(window.contains(Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap()));
    }
}
