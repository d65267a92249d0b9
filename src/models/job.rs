//! The three time selections that describe a babysitting job.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CalculatorResult;

use super::time_format::{hour_minute, parse_time_of_day};

/// Start, bedtime and end of a single night's job.
///
/// The three boundaries are always supplied together; none of them carries a
/// date, so an end of `02:00` means two o'clock the following morning.
///
/// # Example
///
/// ```
/// use babysitter_calc::models::JobTimes;
///
/// let times = JobTimes::parse("17:00", "21:00", "02:00").unwrap();
/// let json = serde_json::to_string(&times).unwrap();
/// assert_eq!(json, r#"{"start":"17:00","bedtime":"21:00","end":"02:00"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTimes {
    /// When the sitter arrives.
    #[serde(with = "hour_minute")]
    pub start: NaiveTime,
    /// When the children go to bed.
    #[serde(with = "hour_minute")]
    pub bedtime: NaiveTime,
    /// When the sitter leaves.
    #[serde(with = "hour_minute")]
    pub end: NaiveTime,
}

impl JobTimes {
    /// Creates job times from already-parsed values.
    pub fn new(start: NaiveTime, bedtime: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            bedtime,
            end,
        }
    }

    /// Parses job times from `"HH:MM"` or `"hh:mm AM"` strings.
    pub fn parse(start: &str, bedtime: &str, end: &str) -> CalculatorResult<Self> {
        Ok(Self {
            start: parse_time_of_day(start)?,
            bedtime: parse_time_of_day(bedtime)?,
            end: parse_time_of_day(end)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_parse_all_three() {
        let times = JobTimes::parse("17:00", "09:00 PM", "02:00").unwrap();
        assert_eq!(times.start, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(times.bedtime, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
        assert_eq!(times.end, NaiveTime::from_hms_opt(2, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_reports_the_bad_field() {
        match JobTimes::parse("17:00", "late", "02:00") {
            Err(CalculatorError::InvalidTime { input, .. }) => assert_eq!(input, "late"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_json() {
        let times: JobTimes =
            serde_json::from_str(r#"{"start":"22:00","bedtime":"21:00","end":"02:00"}"#).unwrap();
        assert_eq!(times, JobTimes::parse("22:00", "21:00", "02:00").unwrap());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result: Result<JobTimes, _> =
            serde_json::from_str(r#"{"start":"22:00","bedtime":"21:00"}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field `end`"), "{}", message);
    }
}
