//! Wall-clock timestamps

use chrono::{SecondsFormat, Utc};

/// Current instant as an ISO-8601 UTC string with millisecond
/// precision, e.g. `2026-08-30T11:30:00.123Z`.
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;

    #[test]
    fn test_timestamp_is_utc_iso_8601() {
        let ts = now_utc();
        assert!(ts.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_timestamp_has_at_least_second_precision() {
        // 2026-08-30T11:30:00Z is 20 chars; millis make it longer
        assert!(now_utc().len() >= 20);
    }
}
