//! Calculation logic for the babysitting job calculator.
//!
//! This module contains time normalization, the start/end ordering check,
//! the tiered rate calculator with its clamping rules, and currency
//! formatting for totals.

mod currency;
mod normalize;
mod ordering;
mod tiers;

pub use currency::format_currency;
pub use normalize::{NormalizedTime, normalize, normalized_midnight};
pub use ordering::is_start_after_end;
pub use tiers::{Boundaries, ClampRule, RateCalculator};
