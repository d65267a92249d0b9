//! Configuration types for the babysitting job calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every type also has a
//! `Default` holding the calculator's historical constants.

use chrono::{NaiveTime, TimeDelta, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RateTier, hour_minute};

/// Hourly rates for the three tiers of a job.
///
/// # Example
///
/// ```
/// use babysitter_calc::config::RateTable;
/// use babysitter_calc::models::RateTier;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// assert_eq!(rates.rate_for(RateTier::MidnightToEnd), Decimal::from(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate from the start of the job until bedtime.
    pub start_to_bedtime: Decimal,
    /// Rate from bedtime until midnight.
    pub bedtime_to_midnight: Decimal,
    /// Rate from midnight until the end of the job.
    pub midnight_to_end: Decimal,
}

impl RateTable {
    /// Returns the hourly rate for a tier.
    pub fn rate_for(&self, tier: RateTier) -> Decimal {
        match tier {
            RateTier::StartToBedtime => self.start_to_bedtime,
            RateTier::BedtimeToMidnight => self.bedtime_to_midnight,
            RateTier::MidnightToEnd => self.midnight_to_end,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            start_to_bedtime: Decimal::from(12),
            bedtime_to_midnight: Decimal::from(8),
            midnight_to_end: Decimal::from(16),
        }
    }
}

/// The window of times a job may occupy.
///
/// A job starts no earlier than `earliest_start` and ends no later than
/// `latest_end` on the following morning. The hour of `earliest_start` is the
/// reference hour used to normalize every time before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLimits {
    /// The earliest allowed start time.
    #[serde(with = "hour_minute")]
    pub earliest_start: NaiveTime,
    /// The latest allowed end time (next calendar day).
    #[serde(with = "hour_minute")]
    pub latest_end: NaiveTime,
}

impl ShiftLimits {
    /// The hour that normalization treats as zero.
    pub fn reference_hour(&self) -> u32 {
        self.earliest_start.hour()
    }

    /// Number of whole hours between `earliest_start` and `latest_end`.
    ///
    /// ```
    /// use babysitter_calc::config::ShiftLimits;
    ///
    /// assert_eq!(ShiftLimits::default().window_hours(), 11);
    /// ```
    pub fn window_hours(&self) -> u32 {
        (self.latest_end - TimeDelta::hours(i64::from(self.reference_hour()))).hour()
    }
}

impl Default for ShiftLimits {
    fn default() -> Self {
        Self {
            earliest_start: NaiveTime::MIN + TimeDelta::hours(17),
            latest_end: NaiveTime::MIN + TimeDelta::hours(4),
        }
    }
}

/// How monetary totals are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount.
    pub symbol: String,
    /// Digits after the decimal point.
    pub decimal_places: u32,
    /// Separator between groups of three integer digits. Empty disables grouping.
    #[serde(default)]
    pub thousands_separator: String,
}

impl CurrencyFormat {
    /// The most digits a decimal amount can carry after the point.
    pub const MAX_DECIMAL_PLACES: u32 = 28;
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_places: 2,
            thousands_separator: ",".to_string(),
        }
    }
}

/// The complete calculator configuration.
///
/// Loaded from YAML by [`ConfigLoader`](super::ConfigLoader) or built with
/// `CalculatorConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Hourly rates per tier.
    pub rates: RateTable,
    /// Allowed start and end times.
    pub limits: ShiftLimits,
    /// Currency rendering.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

impl CalculatorConfig {
    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the shift limits.
    pub fn limits(&self) -> &ShiftLimits {
        &self.limits
    }

    /// Returns the currency format.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }
}
