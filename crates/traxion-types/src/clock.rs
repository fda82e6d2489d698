//! Time-of-day helpers (24h "HH:MM")

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};

const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a 24h "HH:MM" time of day
pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), CLOCK_FORMAT).map_err(|_| Error::InvalidTime(s.to_string()))
}

/// Format as zero-padded "HH:MM"
pub fn format_clock_time(time: &NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Minutes elapsed since midnight
pub fn minutes_since_midnight(time: &NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Serde adapter that keeps clock times as "HH:MM" strings
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock_time(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_clock_time(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let t = parse_clock_time("08:05").unwrap();
        assert_eq!(format_clock_time(&t), "08:05");
        assert_eq!(minutes_since_midnight(&t), 485);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        let t = parse_clock_time("7:30").unwrap();
        assert_eq!(format_clock_time(&t), "07:30");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_clock_time("25:00"), Err(Error::InvalidTime(_))));
        assert!(parse_clock_time("noon").is_err());
    }
}
