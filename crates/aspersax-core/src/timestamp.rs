//! Lenient timestamp parsing for stored records.
//!
//! Records written by the web console carry local timestamps without an
//! offset (`2025-08-27T11:30:00`), while newer ones are RFC 3339. Both are
//! accepted; offset-less values are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an RFC 3339 or offset-less timestamp.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` target for `DateTime<Utc>` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_offset_less_timestamp_is_utc() {
        assert_eq!(
            parse("2025-08-27T11:30:00"),
            Some(Utc.with_ymd_and_hms(2025, 8, 27, 11, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_rfc3339_with_offset_is_converted() {
        assert_eq!(
            parse("2025-08-27T11:30:00-05:00"),
            Some(Utc.with_ymd_and_hms(2025, 8, 27, 16, 30, 0).unwrap())
        );
        assert!(parse("2025-08-27T06:30:00.123Z").is_some());
    }

    #[test]
    fn test_fractional_seconds_without_offset() {
        assert!(parse("2025-08-27T06:30:00.5").is_some());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("yesterday").is_none());
        assert!(parse("2025-08-27").is_none());
    }
}
