//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::RateTier;

use super::types::{CalculatorConfig, CurrencyFormat};

/// Loads and validates calculator configuration.
///
/// The file holds three sections:
/// ```text
/// rates:     hourly rate per tier
/// limits:    earliest start and latest end
/// currency:  symbol, decimal places, thousands separator (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use babysitter_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/babysitter.yaml").unwrap();
/// println!("Reference hour: {}", loader.config().limits().reference_hour());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or an unparseable time
    /// - A rate is negative or the shift window is empty
    ///
    /// # Example
    ///
    /// ```no_run
    /// use babysitter_calc::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/babysitter.yaml")?;
    /// # Ok::<(), babysitter_calc::error::CalculatorError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded calculator configuration");
        Ok(Self { config })
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> CalculatorResult<CalculatorConfig> {
        let config: CalculatorConfig =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &CalculatorConfig) -> CalculatorResult<()> {
        for tier in RateTier::ALL {
            if config.rates().rate_for(tier) < Decimal::ZERO {
                return Err(CalculatorError::InvalidConfig {
                    field: format!("rates.{}", tier),
                    message: "must not be negative".to_string(),
                });
            }
        }

        if config.limits().earliest_start == config.limits().latest_end {
            return Err(CalculatorError::InvalidConfig {
                field: "limits".to_string(),
                message: "earliest_start and latest_end must differ".to_string(),
            });
        }

        if config.currency().decimal_places > CurrencyFormat::MAX_DECIMAL_PLACES {
            return Err(CalculatorError::InvalidConfig {
                field: "currency.decimal_places".to_string(),
                message: format!(
                    "must be at most {}",
                    CurrencyFormat::MAX_DECIMAL_PLACES
                ),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }
}
