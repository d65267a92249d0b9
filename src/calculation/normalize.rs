//! Time normalization.
//!
//! A job runs from the evening into the next morning, but a time of day has
//! no date. Shifting every time back by the reference hour (the hour of the
//! earliest allowed start) moves the whole job onto a single virtual day that
//! begins at the reference hour, so `01:00` sorts after `21:00` and
//! subtraction gives elapsed hours.

use chrono::{NaiveTime, TimeDelta, Timelike};

/// A time of day shifted by the reference hour.
///
/// Only comparable with other values normalized against the same reference.
///
/// # Example
///
/// ```
/// use babysitter_calc::calculation::normalize;
/// use chrono::NaiveTime;
///
/// let nine_pm = normalize(NaiveTime::from_hms_opt(21, 0, 0).unwrap(), 17);
/// let one_am = normalize(NaiveTime::from_hms_opt(1, 0, 0).unwrap(), 17);
///
/// assert!(one_am > nine_pm);
/// assert_eq!(nine_pm.hours_until(one_am), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedTime(NaiveTime);

impl NormalizedTime {
    /// Whole hours past the reference hour.
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Whole hours from `self` to `later`; negative if `later` comes first.
    pub fn hours_until(self, later: NormalizedTime) -> i64 {
        i64::from(later.hour()) - i64::from(self.hour())
    }

    /// The shifted value as a plain time of day.
    pub fn as_naive_time(self) -> NaiveTime {
        self.0
    }
}

/// Shifts `time` back by `reference_hour` hours.
///
/// Never fails and performs no validation.
pub fn normalize(time: NaiveTime, reference_hour: u32) -> NormalizedTime {
    NormalizedTime(time - TimeDelta::hours(i64::from(reference_hour)))
}

/// Midnight, normalized against `reference_hour`.
pub fn normalized_midnight(reference_hour: u32) -> NormalizedTime {
    normalize(NaiveTime::MIN, reference_hour)
}
