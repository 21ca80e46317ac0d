//! Combined run configuration.

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cost::CostParams;
use crate::error::Result;
use crate::sa::SaConfig;

/// Search settings and cost weights for one rostering run.
///
/// With the `serde` feature, loads from TOML; every key is optional.
///
/// ```toml
/// [sa]
/// initial_temp = 100.0
/// min_temp = 0.1
/// cooling_rate = 0.95
/// iterations_per_temperature = 100
/// seed = 42
/// initial_solution = "scarcity"
///
/// [cost]
/// understaff_penalty = 100
/// weekly_hours_violation = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RosterConfig {
    pub sa: SaConfig,
    pub cost: CostParams,
}

impl RosterConfig {
    pub fn new(sa: SaConfig, cost: CostParams) -> Self {
        Self { sa, cost }
    }

    /// Loads and validates configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sa.validate()
    }
}
