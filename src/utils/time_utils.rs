use chrono::{DateTime, SecondsFormat, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_90_MIN: i64 = Self::MS_IN_MIN * 90;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_36_H: i64 = Self::MS_IN_H * 36;

    pub fn ms_to_hours(ms: i64) -> f64 {
        ms as f64 / Self::MS_IN_H as f64
    }
}

/// Parse a collector timestamp (`YYYY-MM-DDTHH:MM:SSZ`) into epoch milliseconds.
pub fn parse_collector_timestamp(text: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).timestamp_millis())
}

/// ISO-8601 UTC rendering with second precision, as the report header uses.
pub fn to_iso_utc(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Out-of-range instants render as an empty string.
pub fn epoch_ms_to_iso(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => to_iso_utc(&dt),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_collector_timestamp_round_trip() {
        let ms = parse_collector_timestamp("2025-08-29T12:00:00Z").unwrap();
        assert_eq!(epoch_ms_to_iso(ms), "2025-08-29T12:00:00Z");
    }

    #[test]
    fn test_iso_header_format() {
        let dt = Utc.with_ymd_and_hms(2025, 8, 29, 19, 5, 0).unwrap();
        assert_eq!(to_iso_utc(&dt), "2025-08-29T19:05:00Z");
    }

    #[test]
    fn test_out_of_range_epoch_renders_empty() {
        assert_eq!(epoch_ms_to_iso(i64::MAX), "");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_collector_timestamp("yesterday").is_none());
    }
}
