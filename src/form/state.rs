//! Selection state for the job form.
//!
//! [`JobForm`] tracks the three selectors, blocks calculation while the start
//! is later than the end, and holds the last formatted total. It knows
//! nothing about widgets; a front end forwards selection events and renders
//! whatever [`JobForm::message`] and [`JobForm::result_text`] return.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{RateCalculator, is_start_after_end};
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{JobCharge, JobTimes};

/// Shown when a new start time lands after the selected end time.
pub const START_BEFORE_END_MESSAGE: &str = "Start Time must be before End Time.";

/// Shown when a new end time lands before the selected start time.
pub const END_AFTER_START_MESSAGE: &str = "End Time must be after Start Time.";

/// The three selectors on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Start time selector.
    Start,
    /// Bedtime selector.
    Bedtime,
    /// End time selector.
    End,
}

/// A validation message attached to the selector that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
    /// The selector the user just changed.
    pub field: FormField,
    /// Text to show the user.
    pub text: String,
}

/// Toolkit-independent state of the job form.
///
/// # Example
///
/// ```
/// use babysitter_calc::calculation::RateCalculator;
/// use babysitter_calc::form::JobForm;
/// use chrono::NaiveTime;
///
/// let calculator = RateCalculator::default();
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0);
///
/// let mut form = JobForm::new(calculator.reference_hour());
/// form.select_start(at(17));
/// form.select_bedtime(at(21));
/// form.select_end(at(2));
///
/// assert!(form.can_calculate());
/// form.calculate(&calculator).unwrap();
/// assert_eq!(form.result_text(), Some("$104.00"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobForm {
    reference_hour: u32,
    start: Option<NaiveTime>,
    bedtime: Option<NaiveTime>,
    end: Option<NaiveTime>,
    ordering_error: Option<FormMessage>,
    result_text: Option<String>,
}

impl JobForm {
    /// Creates an empty form that orders times against `reference_hour`.
    pub fn new(reference_hour: u32) -> Self {
        Self {
            reference_hour,
            start: None,
            bedtime: None,
            end: None,
            ordering_error: None,
            result_text: None,
        }
    }

    /// Sets or clears the start time and re-checks ordering.
    pub fn select_start(&mut self, start: Option<NaiveTime>) -> Option<&FormMessage> {
        self.start = start;
        self.result_text = None;
        self.check_ordering(FormField::Start);
        self.ordering_error.as_ref()
    }

    /// Sets or clears the bedtime.
    pub fn select_bedtime(&mut self, bedtime: Option<NaiveTime>) -> Option<&FormMessage> {
        self.bedtime = bedtime;
        self.result_text = None;
        self.ordering_error.as_ref()
    }

    /// Sets or clears the end time and re-checks ordering.
    pub fn select_end(&mut self, end: Option<NaiveTime>) -> Option<&FormMessage> {
        self.end = end;
        self.result_text = None;
        self.check_ordering(FormField::End);
        self.ordering_error.as_ref()
    }

    fn check_ordering(&mut self, changed: FormField) {
        self.ordering_error = match (self.start, self.end) {
            (Some(start), Some(end)) if is_start_after_end(start, end, self.reference_hour) => {
                let text = match changed {
                    FormField::End => END_AFTER_START_MESSAGE,
                    FormField::Start | FormField::Bedtime => START_BEFORE_END_MESSAGE,
                };
                debug!(?changed, "Start is later than end");
                Some(FormMessage {
                    field: changed,
                    text: text.to_string(),
                })
            }
            _ => None,
        };
    }

    /// The pending validation message, if any.
    pub fn message(&self) -> Option<&FormMessage> {
        self.ordering_error.as_ref()
    }

    /// All three selections, if every selector has a value.
    pub fn selection(&self) -> Option<JobTimes> {
        Some(JobTimes::new(self.start?, self.bedtime?, self.end?))
    }

    /// True when every selector has a value and no ordering problem is pending.
    pub fn can_calculate(&self) -> bool {
        self.selection().is_some() && self.ordering_error.is_none()
    }

    /// Prices the selected job and stores its formatted total.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::InvalidTime`] if a selector is empty
    /// - [`CalculatorError::OrderingViolation`] if start is later than end
    /// - anything [`RateCalculator::calculate`] returns
    pub fn calculate(&mut self, calculator: &RateCalculator) -> CalculatorResult<JobCharge> {
        let times = self.selection().ok_or_else(|| CalculatorError::InvalidTime {
            input: String::new(),
            message: format!("{} time not selected", self.first_missing()),
        })?;

        if let Some(error) = &self.ordering_error {
            return Err(CalculatorError::OrderingViolation {
                start: times.start,
                end: times.end,
                message: error.text.clone(),
            });
        }

        let charge = calculator.calculate(&times)?;
        self.result_text = Some(charge.formatted_total.clone());
        Ok(charge)
    }

    fn first_missing(&self) -> &'static str {
        if self.start.is_none() {
            "start"
        } else if self.bedtime.is_none() {
            "bedtime"
        } else {
            "end"
        }
    }

    /// The formatted total from the last successful calculation.
    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    /// Clears every selector, message and result.
    pub fn reset(&mut self) {
        *self = Self::new(self.reference_hour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(hour, 0, 0)
    }

    fn filled(start: u32, bedtime: u32, end: u32) -> JobForm {
        let mut form = JobForm::new(17);
        form.select_start(at(start));
        form.select_bedtime(at(bedtime));
        form.select_end(at(end));
        form
    }

    #[test]
    fn test_empty_form_cannot_calculate() {
        let form = JobForm::new(17);
        assert!(!form.can_calculate());
        assert!(form.message().is_none());
        assert!(form.result_text().is_none());
    }

    #[test]
    fn test_partial_form_cannot_calculate() {
        let mut form = JobForm::new(17);
        form.select_start(at(17));
        form.select_end(at(2));
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_calculate_on_partial_form_names_missing_field() {
        let mut form = JobForm::new(17);
        form.select_start(at(17));
        match form.calculate(&RateCalculator::default()) {
            Err(CalculatorError::InvalidTime { message, .. }) => {
                assert_eq!(message, "bedtime time not selected");
            }
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_form_calculates() {
        let mut form = filled(17, 21, 2);
        assert!(form.can_calculate());

        let charge = form.calculate(&RateCalculator::default()).unwrap();
        assert_eq!(charge.formatted_total, "$104.00");
        assert_eq!(form.result_text(), Some("$104.00"));
    }

    #[test]
    fn test_start_after_end_blocks_with_start_message() {
        let mut form = JobForm::new(17);
        form.select_end(at(17));
        let message = form.select_start(at(18)).cloned().unwrap();

        assert_eq!(message.field, FormField::Start);
        assert_eq!(message.text, START_BEFORE_END_MESSAGE);
    }

    #[test]
    fn test_end_before_start_blocks_with_end_message() {
        let mut form = JobForm::new(17);
        form.select_start(at(22));
        form.select_bedtime(at(21));
        let message = form.select_end(at(20)).cloned().unwrap();

        assert_eq!(message.field, FormField::End);
        assert_eq!(message.text, END_AFTER_START_MESSAGE);
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_calculate_while_blocked_is_ordering_violation() {
        let mut form = filled(22, 21, 20);
        match form.calculate(&RateCalculator::default()) {
            Err(CalculatorError::OrderingViolation { message, .. }) => {
                assert_eq!(message, END_AFTER_START_MESSAGE);
            }
            other => panic!("Expected OrderingViolation, got {:?}", other),
        }
        assert!(form.result_text().is_none());
    }

    #[test]
    fn test_ordering_violation_carries_start_message() {
        let mut form = JobForm::new(17);
        form.select_end(at(20));
        form.select_bedtime(at(21));
        form.select_start(at(22));

        match form.calculate(&RateCalculator::default()) {
            Err(CalculatorError::OrderingViolation { message, .. }) => {
                assert_eq!(message, START_BEFORE_END_MESSAGE);
            }
            other => panic!("Expected OrderingViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_fixing_either_side_clears_the_block() {
        let mut form = filled(22, 21, 20);
        assert!(!form.can_calculate());

        form.select_end(at(2));
        assert!(form.message().is_none());
        assert!(form.can_calculate());

        form.select_start(at(3));
        assert!(!form.can_calculate());

        form.select_start(at(1));
        assert!(form.can_calculate());
    }

    #[test]
    fn test_clearing_a_selector_clears_the_message() {
        let mut form = filled(22, 21, 20);
        form.select_end(None);
        assert!(form.message().is_none());
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_bedtime_change_keeps_pending_message() {
        let mut form = filled(22, 21, 20);
        assert!(form.select_bedtime(at(23)).is_some());
    }

    #[test]
    fn test_selection_change_discards_stale_result() {
        let mut form = filled(17, 21, 2);
        form.calculate(&RateCalculator::default()).unwrap();
        form.select_bedtime(at(20));
        assert!(form.result_text().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled(17, 21, 2);
        form.calculate(&RateCalculator::default()).unwrap();

        form.reset();

        assert_eq!(form, JobForm::new(17));
    }
}
