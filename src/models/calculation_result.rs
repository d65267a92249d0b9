//! Calculation result models for the babysitting job calculator.
//!
//! This module contains the [`JobCharge`] type and its associated structures
//! that capture all outputs from a charge calculation: the clamped
//! boundaries, one charge line per rate tier, the total, and an audit trace.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::JobTimes;

/// One of the three hourly-rate segments of a job.
///
/// # Example
///
/// ```
/// use babysitter_calc::models::RateTier;
///
/// assert_eq!(RateTier::BedtimeToMidnight.to_string(), "bedtime_to_midnight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// From the start of the job until bedtime.
    StartToBedtime,
    /// From bedtime until midnight.
    BedtimeToMidnight,
    /// From midnight until the end of the job.
    MidnightToEnd,
}

impl RateTier {
    /// All tiers, in the order they occur during a night.
    pub const ALL: [RateTier; 3] = [
        RateTier::StartToBedtime,
        RateTier::BedtimeToMidnight,
        RateTier::MidnightToEnd,
    ];

    /// The snake_case identifier used in audit records and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            RateTier::StartToBedtime => "start_to_bedtime",
            RateTier::BedtimeToMidnight => "bedtime_to_midnight",
            RateTier::MidnightToEnd => "midnight_to_end",
        }
    }
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The four boundaries after clamping, as whole hours past the reference hour.
///
/// With the default 17:00 reference, `start: 0` is 17:00 and `midnight: 7`
/// is 00:00. After clamping `start <= bedtime <= midnight <= end` holds for
/// every well-formed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampedBoundaries {
    /// Normalized start hour.
    pub start: u32,
    /// Normalized bedtime hour after clamping.
    pub bedtime: u32,
    /// Normalized midnight hour after clamping.
    pub midnight: u32,
    /// Normalized end hour.
    pub end: u32,
}

/// The charge for the hours spent in a single tier.
///
/// # Example
///
/// ```
/// use babysitter_calc::models::{RateTier, TierCharge};
/// use rust_decimal::Decimal;
///
/// let line = TierCharge {
///     tier: RateTier::StartToBedtime,
///     hours: Decimal::from(4),
///     rate: Decimal::from(12),
///     amount: Decimal::from(48),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCharge {
    /// The tier these hours fall into.
    pub tier: RateTier,
    /// Whole hours spent in the tier.
    pub hours: Decimal,
    /// Hourly rate for the tier.
    pub rate: Decimal,
    /// `hours * rate`.
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made while pricing a job, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// All steps, numbered from 1.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the ids of the rules that were applied, in order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.rule_id.as_str()).collect()
    }

    /// Returns true if a step with the given rule id was recorded.
    pub fn contains_rule(&self, rule_id: &str) -> bool {
        self.steps.iter().any(|s| s.rule_id == rule_id)
    }
}

/// The complete output of pricing one babysitting job.
///
/// The result is a pure function of the job times and the configuration; it
/// holds no ids or timestamps, so identical inputs always produce equal
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCharge {
    /// The times the charge was computed from.
    pub times: JobTimes,
    /// The boundaries actually used for duration arithmetic.
    pub boundaries: ClampedBoundaries,
    /// One line per tier, in [`RateTier::ALL`] order.
    pub tiers: Vec<TierCharge>,
    /// Sum of all tier amounts.
    pub total: Decimal,
    /// `total` rendered with the configured currency format.
    pub formatted_total: String,
    /// How the total was reached.
    pub audit_trace: AuditTrace,
}

impl JobCharge {
    /// Returns the charge line for a tier.
    pub fn tier(&self, tier: RateTier) -> Option<&TierCharge> {
        self.tiers.iter().find(|t| t.tier == tier)
    }

    /// Total billable hours across all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.tiers.iter().map(|t| t.hours).sum()
    }
}
