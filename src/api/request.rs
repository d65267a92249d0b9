//! Request types for the calculator API.
//!
//! `/calculate` times arrive as strings and are parsed after extraction.
//! `/validate` times are parsed while the body is deserialized; the handler
//! reports a bad one as `INVALID_TIME` in both cases.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};
use crate::form::FormField;
use crate::models::{JobTimes, optional_hour_minute};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Start time, `"HH:MM"` or `"hh:mm AM"`.
    pub start: String,
    /// Bedtime, `"HH:MM"` or `"hh:mm AM"`.
    pub bedtime: String,
    /// End time, `"HH:MM"` or `"hh:mm AM"`.
    pub end: String,
}

impl CalculationRequest {
    /// Creates a request from three time strings.
    pub fn new(start: impl Into<String>, bedtime: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            bedtime: bedtime.into(),
            end: end.into(),
        }
    }
}

impl TryFrom<CalculationRequest> for JobTimes {
    type Error = CalculatorError;

    fn try_from(req: CalculationRequest) -> CalculatorResult<Self> {
        JobTimes::parse(&req.start, &req.bedtime, &req.end)
    }
}

/// Request body for the `/validate` endpoint.
///
/// Mirrors the form: any selector may be missing or blank. `changed` names
/// the selector the user just touched and picks which ordering message is
/// returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Start time, if selected.
    #[serde(default, with = "optional_hour_minute")]
    pub start: Option<NaiveTime>,
    /// Bedtime, if selected.
    #[serde(default, with = "optional_hour_minute")]
    pub bedtime: Option<NaiveTime>,
    /// End time, if selected.
    #[serde(default, with = "optional_hour_minute")]
    pub end: Option<NaiveTime>,
    /// The selector that changed last. Defaults to `end`.
    #[serde(default)]
    pub changed: Option<FormField>,
}
