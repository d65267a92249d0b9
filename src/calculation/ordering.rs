//! Start/end ordering check used by the form before it allows a calculation.

use chrono::NaiveTime;

use super::normalize::normalize;

/// Returns true if `start` is strictly later than `end` once both are
/// normalized against `reference_hour`.
///
/// # Examples
///
/// ```
/// use babysitter_calc::calculation::is_start_after_end;
/// use chrono::NaiveTime;
///
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// let six = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
///
/// assert!(is_start_after_end(six, five, 17));
/// assert!(!is_start_after_end(five, six, 17));
/// ```
pub fn is_start_after_end(start: NaiveTime, end: NaiveTime, reference_hour: u32) -> bool {
    normalize(start, reference_hour) > normalize(end, reference_hour)
}
