//! Application state for the calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::RateCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the calculator, built once from the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<RateCalculator>,
}

impl AppState {
    /// Creates a new application state around a calculator.
    pub fn new(calculator: RateCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Creates a new application state from a configuration loader.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(RateCalculator::new(loader.into_config()))
    }

    /// Returns the shared calculator.
    pub fn calculator(&self) -> &RateCalculator {
        &self.calculator
    }
}
