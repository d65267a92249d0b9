//! Parsing and serde helpers for times of day.
//!
//! Times travel as `"HH:MM"` strings. Parsing also accepts `"HH:MM:SS"` and
//! the 12-hour labels shown in the form's option lists (`"05:00 PM"`).

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{CalculatorError, CalculatorResult};

/// Format used when a time is written out.
pub const TIME_FORMAT: &str = "%H:%M";

/// Format of the labels in the form's option lists.
pub const LABEL_FORMAT: &str = "%I:%M %p";

const ACCEPTED_FORMATS: [&str; 3] = [TIME_FORMAT, "%H:%M:%S", LABEL_FORMAT];

/// Parses a whole-hour time of day.
///
/// # Examples
///
/// ```
/// use babysitter_calc::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// assert_eq!(parse_time_of_day("17:00").unwrap(), five_pm);
/// assert_eq!(parse_time_of_day("05:00 PM").unwrap(), five_pm);
/// assert!(parse_time_of_day("17:30").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> CalculatorResult<NaiveTime> {
    let trimmed = input.trim();

    let time = ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CalculatorError::InvalidTime {
            input: input.to_string(),
            message: "expected HH:MM or hh:mm AM/PM".to_string(),
        })?;

    if time.minute() != 0 || time.second() != 0 {
        return Err(CalculatorError::InvalidTime {
            input: input.to_string(),
            message: "time must fall on the hour".to_string(),
        });
    }

    Ok(time)
}

/// Renders a time as an option-list label, e.g. `"09:00 PM"`.
pub fn format_label(time: NaiveTime) -> String {
    time.format(LABEL_FORMAT).to_string()
}

/// Serde adapter for a required `"HH:MM"` time.
pub mod hour_minute {
    use super::*;

    /// Serializes a time as `"HH:MM"`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    /// Deserializes a time with [`parse_time_of_day`].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for an optional `"HH:MM"` time. Blank strings read as `None`.
pub mod optional_hour_minute {
    use super::*;

    /// Serializes an optional time as `"HH:MM"` or `null`.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_str(&time.format(TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional time with [`parse_time_of_day`].
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) if !raw.trim().is_empty() => parse_time_of_day(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_24_hour_format() {
        assert_eq!(parse_time_of_day("21:00").unwrap(), time(21));
        assert_eq!(parse_time_of_day("00:00").unwrap(), time(0));
    }

    #[test]
    fn test_parse_with_seconds() {
        assert_eq!(parse_time_of_day("02:00:00").unwrap(), time(2));
    }

    #[test]
    fn test_parse_label_format() {
        assert_eq!(parse_time_of_day("09:00 PM").unwrap(), time(21));
        assert_eq!(parse_time_of_day("12:00 AM").unwrap(), time(0));
        assert_eq!(parse_time_of_day(" 01:00 AM ").unwrap(), time(1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        match parse_time_of_day("bedtime") {
            Err(CalculatorError::InvalidTime { input, .. }) => assert_eq!(input, "bedtime"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_hour() {
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn test_parse_rejects_half_hours() {
        match parse_time_of_day("17:30") {
            Err(CalculatorError::InvalidTime { message, .. }) => {
                assert!(message.contains("on the hour"));
            }
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(time(17)), "05:00 PM");
        assert_eq!(format_label(time(0)), "12:00 AM");
    }

    #[test]
    fn test_optional_adapter_treats_blank_as_none() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, with = "optional_hour_minute")]
            at: Option<NaiveTime>,
        }

        let blank: Probe = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        assert_eq!(blank.at, None);

        let missing: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.at, None);

        let set: Probe = serde_json::from_str(r#"{"at": "18:00"}"#).unwrap();
        assert_eq!(set.at, Some(time(18)));
    }
}
