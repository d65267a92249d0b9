//! Option lists for the three time selectors.
//!
//! Each list is derived from the configured [`ShiftLimits`]: starts run from
//! the earliest start up to an hour before the latest end, bedtimes from the
//! earliest start up to midnight, and ends from an hour after the earliest
//! start up to the latest end.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::calculation::normalized_midnight;
use crate::config::ShiftLimits;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{JobTimes, format_label, hour_minute};

/// One entry in a selector: the value and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOption {
    /// The time this option selects.
    #[serde(with = "hour_minute")]
    pub value: NaiveTime,
    /// The 12-hour label, e.g. `"05:00 PM"`.
    pub label: String,
}

impl From<NaiveTime> for TimeOption {
    fn from(value: NaiveTime) -> Self {
        Self {
            value,
            label: format_label(value),
        }
    }
}

/// All three option lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Options for the start selector.
    pub start_times: Vec<TimeOption>,
    /// Options for the bedtime selector.
    pub bedtimes: Vec<TimeOption>,
    /// Options for the end selector.
    pub end_times: Vec<TimeOption>,
}

impl FormOptions {
    /// Builds every option list for `limits`.
    pub fn for_limits(limits: &ShiftLimits) -> Self {
        Self {
            start_times: valid_start_times(limits).into_iter().map(Into::into).collect(),
            bedtimes: valid_bedtimes(limits).into_iter().map(Into::into).collect(),
            end_times: valid_end_times(limits).into_iter().map(Into::into).collect(),
        }
    }
}

fn hours_from_earliest(limits: &ShiftLimits, offsets: impl Iterator<Item = u32>) -> Vec<NaiveTime> {
    offsets
        .map(|offset| limits.earliest_start + TimeDelta::hours(i64::from(offset)))
        .collect()
}

/// Allowed start times.
///
/// ```
/// use babysitter_calc::config::ShiftLimits;
/// use babysitter_calc::form::valid_start_times;
/// use chrono::NaiveTime;
///
/// let starts = valid_start_times(&ShiftLimits::default());
/// assert_eq!(starts.len(), 11);
/// assert_eq!(starts[0], NaiveTime::from_hms_opt(17, 0, 0).unwrap());
/// assert_eq!(starts[10], NaiveTime::from_hms_opt(3, 0, 0).unwrap());
/// ```
pub fn valid_start_times(limits: &ShiftLimits) -> Vec<NaiveTime> {
    hours_from_earliest(limits, 0..limits.window_hours())
}

/// Allowed bedtimes: the earliest start through midnight.
pub fn valid_bedtimes(limits: &ShiftLimits) -> Vec<NaiveTime> {
    let to_midnight = normalized_midnight(limits.reference_hour()).hour();
    hours_from_earliest(limits, 0..=to_midnight)
}

/// Allowed end times: an hour after the earliest start through the latest end.
pub fn valid_end_times(limits: &ShiftLimits) -> Vec<NaiveTime> {
    hours_from_earliest(limits, 1..=limits.window_hours())
}

/// Checks that every selection appears in its option list.
pub fn validate_selection(times: &JobTimes, limits: &ShiftLimits) -> CalculatorResult<()> {
    let checks = [
        ("start", times.start, valid_start_times(limits)),
        ("bedtime", times.bedtime, valid_bedtimes(limits)),
        ("end", times.end, valid_end_times(limits)),
    ];

    for (field, time, allowed) in checks {
        if !allowed.contains(&time) {
            return Err(CalculatorError::TimeOutOfRange {
                field: field.to_string(),
                time,
            });
        }
    }

    Ok(())
}
