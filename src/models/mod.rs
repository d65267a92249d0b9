//! Core data models for the babysitting job calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod calculation_result;
mod job;
mod time_format;

pub use calculation_result::{
    AuditStep, AuditTrace, ClampedBoundaries, JobCharge, RateTier, TierCharge,
};
pub use job::JobTimes;
pub use time_format::{
    LABEL_FORMAT, TIME_FORMAT, format_label, hour_minute, optional_hour_minute, parse_time_of_day,
};
