//! Configuration loading and management for the babysitting job calculator.
//!
//! This module provides functionality to load the rate table, the allowed
//! shift window, and currency formatting from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use babysitter_calc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/babysitter.yaml").unwrap();
//! println!("Midnight rate: {}", config.config().rates.midnight_to_end);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CurrencyFormat, RateTable, ShiftLimits};
