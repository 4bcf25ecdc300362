use chrono::{TimeZone, Utc};
use dwell_types::{format_timestamp, parse_timestamp, round_to};

#[test]
fn test_parse_timestamp_accepts_rfc3339_with_offset() {
    let ts = parse_timestamp("2025-06-01T12:00:00+02:00").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_parse_timestamp_accepts_bare_date() {
    let ts = parse_timestamp("2025-06-01").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    let err = parse_timestamp("yesterday").unwrap_err();
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn test_format_timestamp_is_lexicographically_ordered() {
    let a = format_timestamp(&Utc.with_ymd_and_hms(2025, 1, 9, 23, 0, 0).unwrap());
    let b = format_timestamp(&Utc.with_ymd_and_hms(2025, 1, 10, 1, 0, 0).unwrap());
    assert_eq!(a, "2025-01-09T23:00:00.000Z");
    assert!(a < b);
}

#[test]
fn test_round_to_two_places() {
    assert_eq!(round_to(200.0 / 3.0, 2), 66.67);
    assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
    assert_eq!(round_to(23.333, 0), 23.0);
}
