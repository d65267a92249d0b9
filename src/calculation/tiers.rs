//! Tiered rate calculation.
//!
//! A job is billed in up to three tiers: start to bedtime, bedtime to
//! midnight, and midnight to end. All four boundaries are normalized against
//! the reference hour, then clamped so that tiers which do not apply to a
//! particular job collapse to zero hours:
//!
//! 1. bedtime before start: bedtime moves up to start
//! 2. start after midnight: midnight moves up to start
//! 3. end before midnight: midnight moves down to end
//! 4. end before bedtime: bedtime moves down to end
//!
//! The clamped boundaries give the hours in each tier, which are priced with
//! the configured [`RateTable`](crate::config::RateTable).

use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{
    AuditStep, AuditTrace, ClampedBoundaries, JobCharge, JobTimes, RateTier, TierCharge,
};

use super::currency::format_currency;
use super::normalize::{NormalizedTime, normalize, normalized_midnight};
use super::ordering::is_start_after_end;

/// A clamp rule that fired while resolving the boundaries of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampRule {
    /// Bedtime was earlier than start.
    BedtimeToStart,
    /// Start was after midnight.
    MidnightToStart,
    /// End was earlier than midnight.
    MidnightToEnd,
    /// End was earlier than bedtime.
    BedtimeToEnd,
}

impl ClampRule {
    /// Rule id recorded in the audit trace.
    pub fn rule_id(self) -> &'static str {
        match self {
            ClampRule::BedtimeToStart => "clamp_bedtime_to_start",
            ClampRule::MidnightToStart => "clamp_midnight_to_start",
            ClampRule::MidnightToEnd => "clamp_midnight_to_end",
            ClampRule::BedtimeToEnd => "clamp_bedtime_to_end",
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            ClampRule::BedtimeToStart => "Clamp Bedtime Up To Start",
            ClampRule::MidnightToStart => "Clamp Midnight Up To Start",
            ClampRule::MidnightToEnd => "Clamp Midnight Down To End",
            ClampRule::BedtimeToEnd => "Clamp Bedtime Down To End",
        }
    }

    fn reasoning(self) -> &'static str {
        match self {
            ClampRule::BedtimeToStart => {
                "Bedtime is before the start of the job: no start-to-bedtime hours"
            }
            ClampRule::MidnightToStart => {
                "Job starts after midnight: no bedtime-to-midnight hours"
            }
            ClampRule::MidnightToEnd => "Job ends before midnight: no midnight-to-end hours",
            ClampRule::BedtimeToEnd => {
                "Job ends before bedtime: every hour is billed at the start-to-bedtime rate"
            }
        }
    }
}

/// Normalized boundaries of a job, before or after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    /// Start of the job.
    pub start: NormalizedTime,
    /// Bedtime.
    pub bedtime: NormalizedTime,
    /// Midnight.
    pub midnight: NormalizedTime,
    /// End of the job.
    pub end: NormalizedTime,
}

impl Boundaries {
    /// Normalizes the job times and midnight against `reference_hour`.
    pub fn normalized(times: &JobTimes, reference_hour: u32) -> Self {
        Self {
            start: normalize(times.start, reference_hour),
            bedtime: normalize(times.bedtime, reference_hour),
            midnight: normalized_midnight(reference_hour),
            end: normalize(times.end, reference_hour),
        }
    }

    /// Applies the four clamp rules in order.
    ///
    /// Returns the clamped boundaries and, for each rule that changed
    /// something, the boundaries right after that rule.
    pub fn clamp(self) -> (Self, Vec<(ClampRule, Self)>) {
        let mut current = self;
        let mut fired = Vec::new();

        if current.bedtime < current.start {
            current.bedtime = current.start;
            fired.push((ClampRule::BedtimeToStart, current));
        }
        if current.start > current.midnight {
            current.midnight = current.start;
            fired.push((ClampRule::MidnightToStart, current));
        }
        if current.end < current.midnight {
            current.midnight = current.end;
            fired.push((ClampRule::MidnightToEnd, current));
        }
        if current.end < current.bedtime {
            current.bedtime = current.end;
            fired.push((ClampRule::BedtimeToEnd, current));
        }

        (current, fired)
    }

    /// Signed whole hours spent in `tier`.
    pub fn hours_in(&self, tier: RateTier) -> i64 {
        match tier {
            RateTier::StartToBedtime => self.start.hours_until(self.bedtime),
            RateTier::BedtimeToMidnight => self.bedtime.hours_until(self.midnight),
            RateTier::MidnightToEnd => self.midnight.hours_until(self.end),
        }
    }

    fn to_model(self) -> ClampedBoundaries {
        ClampedBoundaries {
            start: self.start.hour(),
            bedtime: self.bedtime.hour(),
            midnight: self.midnight.hour(),
            end: self.end.hour(),
        }
    }
}

/// Prices babysitting jobs against a fixed configuration.
///
/// The calculator holds no mutable state; cloning it or sharing it across
/// threads is safe.
///
/// # Example
///
/// ```
/// use babysitter_calc::calculation::RateCalculator;
/// use babysitter_calc::config::CalculatorConfig;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let calculator = RateCalculator::new(CalculatorConfig::default());
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
///
/// let charge = calculator.calculate_total(at(17), at(21), at(2)).unwrap();
/// assert_eq!(charge.total, Decimal::from(104));
/// assert_eq!(charge.formatted_total, "$104.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateCalculator {
    config: CalculatorConfig,
}

impl RateCalculator {
    /// Creates a calculator for the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the calculator prices with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The hour every time is normalized against.
    pub fn reference_hour(&self) -> u32 {
        self.config.limits().reference_hour()
    }

    /// Returns true if `start` is later than `end` within a night.
    pub fn is_start_after_end(&self, start: NaiveTime, end: NaiveTime) -> bool {
        is_start_after_end(start, end, self.reference_hour())
    }

    /// Computes the charge for a job from its three times.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NegativeDuration`] if the times cannot be
    /// clamped into order, which happens when the end of the job is earlier
    /// than its start or bedtime falls after midnight.
    pub fn calculate_total(
        &self,
        start: NaiveTime,
        bedtime: NaiveTime,
        end: NaiveTime,
    ) -> CalculatorResult<JobCharge> {
        self.calculate(&JobTimes::new(start, bedtime, end))
    }

    /// Computes the charge for a job.
    pub fn calculate(&self, times: &JobTimes) -> CalculatorResult<JobCharge> {
        let reference_hour = self.reference_hour();
        let mut steps = Vec::new();

        let normalized = Boundaries::normalized(times, reference_hour);
        steps.push(AuditStep {
            step_number: next_step(&steps),
            rule_id: "time_normalization".to_string(),
            rule_name: "Time Normalization".to_string(),
            input: serde_json::json!({
                "start": times.start.format("%H:%M").to_string(),
                "bedtime": times.bedtime.format("%H:%M").to_string(),
                "end": times.end.format("%H:%M").to_string(),
                "reference_hour": reference_hour
            }),
            output: boundaries_json(&normalized),
            reasoning: format!(
                "Times shifted back {} hours so the night reads as one continuous day",
                reference_hour
            ),
        });

        let (clamped, fired) = normalized.clamp();
        let mut before = normalized;
        for (rule, after) in fired {
            debug!(rule = rule.rule_id(), "Clamp rule applied");
            steps.push(AuditStep {
                step_number: next_step(&steps),
                rule_id: rule.rule_id().to_string(),
                rule_name: rule.rule_name().to_string(),
                input: boundaries_json(&before),
                output: boundaries_json(&after),
                reasoning: rule.reasoning().to_string(),
            });
            before = after;
        }

        let mut tiers = Vec::with_capacity(RateTier::ALL.len());
        for tier in RateTier::ALL {
            let hours = clamped.hours_in(tier);
            if hours < 0 {
                return Err(CalculatorError::NegativeDuration {
                    tier: tier.to_string(),
                    hours,
                });
            }

            let hours = Decimal::from(hours);
            let rate = self.config.rates().rate_for(tier);
            let amount = hours * rate;

            steps.push(AuditStep {
                step_number: next_step(&steps),
                rule_id: "tier_pricing".to_string(),
                rule_name: "Tier Pricing".to_string(),
                input: serde_json::json!({
                    "tier": tier.as_str(),
                    "hours": hours.to_string(),
                    "rate": rate.normalize().to_string()
                }),
                output: serde_json::json!({
                    "amount": amount.normalize().to_string()
                }),
                reasoning: format!(
                    "{} hours x ${} = ${}",
                    hours,
                    rate.normalize(),
                    amount.normalize()
                ),
            });

            tiers.push(TierCharge {
                tier,
                hours,
                rate,
                amount,
            });
        }

        let total: Decimal = tiers.iter().map(|t| t.amount).sum();
        let formatted_total = format_currency(total, self.config.currency());

        steps.push(AuditStep {
            step_number: next_step(&steps),
            rule_id: "job_total".to_string(),
            rule_name: "Job Total".to_string(),
            input: serde_json::json!({
                "tier_amounts": tiers.iter().map(|t| t.amount.normalize().to_string()).collect::<Vec<_>>()
            }),
            output: serde_json::json!({
                "total": total.normalize().to_string(),
                "formatted_total": formatted_total
            }),
            reasoning: format!("Sum of {} tier charges", tiers.len()),
        });

        debug!(total = %total, "Job priced");

        Ok(JobCharge {
            times: *times,
            boundaries: clamped.to_model(),
            tiers,
            total,
            formatted_total,
            audit_trace: AuditTrace { steps },
        })
    }
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}

fn boundaries_json(boundaries: &Boundaries) -> serde_json::Value {
    serde_json::json!({
        "start": boundaries.start.hour(),
        "bedtime": boundaries.bedtime.hour(),
        "midnight": boundaries.midnight.hour(),
        "end": boundaries.end.hour()
    })
}
