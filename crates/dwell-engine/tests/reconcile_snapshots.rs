use chrono::{DateTime, Duration, TimeZone, Utc};
use dwell_engine::{EngagementThresholds, OverCeilingPolicy, SessionAnalyticsReconciler};
use dwell_types::{PropertyId, PropertyTimeSession};

fn entered() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 10, 9, 30, 0).unwrap()
}

fn session(
    key: &str,
    time_spent: Option<i64>,
    heartbeat_after: Option<i64>,
    active_time: Option<i64>,
    scroll_depth: Option<f64>,
) -> PropertyTimeSession {
    PropertyTimeSession {
        id: format!("row-{}", key),
        property_id: PropertyId::from("listing-42"),
        session_key: key.to_string(),
        entered_at: entered(),
        last_heartbeat: heartbeat_after.map(|s| entered() + Duration::seconds(s)),
        left_at: time_spent.map(|s| entered() + Duration::seconds(s)),
        time_spent,
        active_time,
        scroll_depth,
    }
}

fn mixed_sessions() -> Vec<PropertyTimeSession> {
    vec![
        session("a", Some(40), Some(40), Some(30), Some(50.0)),
        session("b", Some(20), Some(20), None, Some(75.5)),
        session("c", None, Some(10), None, None),
        session("d", None, Some(4), None, Some(10.0)),
        session("e", None, None, None, None),
        session("f", None, Some(4000), Some(200), None),
    ]
}

#[test]
fn test_mixed_sessions_snapshot() {
    let metrics = SessionAnalyticsReconciler::default().reconcile(
        &PropertyId::from("listing-42"),
        &mixed_sessions(),
        12,
    );

    insta::assert_json_snapshot!(metrics, @r#"
    {
      "property_id": "listing-42",
      "view_count": 12,
      "session_count": 3,
      "average_time_spent": 23,
      "average_active_time": 20,
      "average_scroll_depth": 62.75,
      "bounce_rate": 66.67,
      "breakdown": {
        "completed_sessions": 2,
        "completed_time_spent_total": 60,
        "estimated_sessions": 1,
        "estimated_time_spent_total": 10,
        "clamped_sessions": 0,
        "excluded_below_floor": 1,
        "excluded_above_ceiling": 1,
        "missing_heartbeat": 1,
        "bounced_sessions": 2
      }
    }
    "#);
}

#[test]
fn test_clamp_policy_keeps_abandoned_tab() {
    let thresholds = EngagementThresholds::default().with_policy(OverCeilingPolicy::Clamp);
    let metrics = SessionAnalyticsReconciler::new(thresholds).reconcile(
        &PropertyId::from("listing-42"),
        &mixed_sessions(),
        12,
    );

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["session_count"], 4);
    assert_eq!(json["breakdown"]["clamped_sessions"], 1);
    assert_eq!(json["breakdown"]["excluded_above_ceiling"], 0);
    // (40 + 20 + 10 + 3600) / 4
    assert_eq!(json["average_time_spent"], 918);
    // (30 + 10 + 200) / 3
    assert_eq!(json["average_active_time"], 80);
    assert_eq!(json["bounce_rate"], 50.0);
}
