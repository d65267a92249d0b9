//! Error types for the babysitting job calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator and its front ends can report.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the calculator.
///
/// Configuration, input validation, and calculation all report through this
/// type so callers handle failures in one place.
///
/// # Example
///
/// ```
/// use babysitter_calc::error::CalculatorError;
///
/// let error = CalculatorError::ConfigNotFound {
///     path: "/missing/babysitter.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/babysitter.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the calculator cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what is wrong with it.
        message: String,
    },

    /// A time string could not be understood as a whole-hour time of day.
    #[error("Invalid time '{input}': {message}")]
    InvalidTime {
        /// The raw input.
        input: String,
        /// A description of the problem.
        message: String,
    },

    /// A selected time is outside the options allowed for its field.
    #[error("{} time {} is outside the allowed range", .field, .time.format("%H:%M"))]
    TimeOutOfRange {
        /// The form field ("start", "bedtime" or "end").
        field: String,
        /// The rejected time.
        time: NaiveTime,
    },

    /// The start of the job is later than its end.
    #[error(
        "Start time {} must be before end time {}",
        .start.format("%H:%M"),
        .end.format("%H:%M")
    )]
    OrderingViolation {
        /// The selected start time.
        start: NaiveTime,
        /// The selected end time.
        end: NaiveTime,
        /// The message the form showed for the selector changed last.
        message: String,
    },

    /// Clamping produced a negative tier duration.
    #[error("Calculation error: {tier} tier has negative duration of {hours} hours")]
    NegativeDuration {
        /// The tier whose duration went negative.
        tier: String,
        /// The computed (negative) hours.
        hours: i64,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
