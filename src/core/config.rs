//! Engine configuration.
//!
//! The engines read their house-rule constants from `EngineConfig`
//! rather than hardcoding them. Defaults follow the standard tables:
//! - Cutting cap: 5,000 gp
//! - Retainer base rate: 100 gp per month
//! - Service surcharge: 10% of the gem's basis value
//! - Value band: 5 rungs below, 7 rungs above the base value's rung

use serde::{Deserialize, Serialize};

use super::error::{AppraisalError, Result};
use super::money::SP_PER_GP;

/// House-rule constants shared by all engines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gems valued at or above this many gold pieces cannot be cut.
    pub cutting_cap_gp: i64,

    /// Retainer base rate in gold pieces per month, before the race multiplier.
    pub monthly_fee_gp: i64,

    /// Fraction of a gem's basis value charged as a service surcharge.
    pub surcharge_rate: f64,

    /// Rungs below the base value's rung that a gem may fall to.
    pub band_below: usize,

    /// Rungs above the base value's rung that a gem may climb to.
    pub band_above: usize,

    /// Longest retainer term that can be contracted at once.
    pub max_retainer_months: u32,

    /// Largest custom batch.
    pub max_custom_batch: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cutting_cap_gp: 5_000,
            monthly_fee_gp: 100,
            surcharge_rate: 0.10,
            band_below: 5,
            band_above: 7,
            max_retainer_months: 120,
            max_custom_batch: 999,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Check the constants are usable.
    pub fn validate(&self) -> Result<()> {
        if self.cutting_cap_gp <= 0 {
            return Err(AppraisalError::InvalidConfig(
                "cutting_cap_gp must be positive".to_string(),
            ));
        }
        if self.monthly_fee_gp < 0 {
            return Err(AppraisalError::InvalidConfig(
                "monthly_fee_gp must not be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.surcharge_rate) {
            return Err(AppraisalError::InvalidConfig(format!(
                "surcharge_rate must be within 0..=1, got {}",
                self.surcharge_rate
            )));
        }
        if self.max_retainer_months == 0 || self.max_custom_batch == 0 {
            return Err(AppraisalError::InvalidConfig(
                "limits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The cutting cap in silver pieces.
    #[must_use]
    pub fn cutting_cap_sp(&self) -> i64 {
        self.cutting_cap_gp * SP_PER_GP
    }

    #[must_use]
    pub fn with_cutting_cap_gp(mut self, cap: i64) -> Self {
        self.cutting_cap_gp = cap;
        self
    }

    #[must_use]
    pub fn with_monthly_fee_gp(mut self, fee: i64) -> Self {
        self.monthly_fee_gp = fee;
        self
    }

    #[must_use]
    pub fn with_surcharge_rate(mut self, rate: f64) -> Self {
        self.surcharge_rate = rate;
        self
    }

    /// Set the band offsets (rungs below, rungs above).
    #[must_use]
    pub fn with_band(mut self, below: usize, above: usize) -> Self {
        self.band_below = below;
        self.band_above = above;
        self
    }
}
