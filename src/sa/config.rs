//! SA configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::InitialSolution;
use crate::error::{Result, RosterError};

/// Configuration for the annealing run.
///
/// Cooling is geometric: after each level of
/// `iterations_per_temperature` moves, `T <- T * cooling_rate`, until
/// `T <= min_temp`.
///
/// # Examples
///
/// ```
/// use u_roster::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temp(50.0)
///     .with_min_temp(0.5)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temp: f64,

    /// The run stops once the temperature is at or below this.
    pub min_temp: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Moves tried at each temperature level.
    pub iterations_per_temperature: u32,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Constructor for the starting schedule.
    pub initial_solution: InitialSolution,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temp: 100.0,
            min_temp: 0.1,
            cooling_rate: 0.95,
            iterations_per_temperature: 100,
            seed: None,
            initial_solution: InitialSolution::default(),
        }
    }
}

impl SaConfig {
    pub fn with_initial_temp(mut self, t: f64) -> Self {
        self.initial_temp = t;
        self
    }

    pub fn with_min_temp(mut self, t: f64) -> Self {
        self.min_temp = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: u32) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_solution(mut self, initial: InitialSolution) -> Self {
        self.initial_solution = initial;
        self
    }

    /// Number of temperature levels the run will visit.
    ///
    /// Counted by replaying the cooling sequence, so floating-point
    /// rounding matches the runner exactly.
    pub fn temperature_levels(&self) -> usize {
        let mut levels = 0;
        let mut t = self.initial_temp;
        while t > self.min_temp {
            levels += 1;
            t *= self.cooling_rate;
        }
        levels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temp.is_finite() || self.initial_temp <= 0.0 {
            return Err(RosterError::Config(format!(
                "initial_temp must be positive and finite, got {}",
                self.initial_temp
            )));
        }
        if self.min_temp.is_nan() || self.min_temp <= 0.0 {
            return Err(RosterError::Config(format!(
                "min_temp must be positive, got {}",
                self.min_temp
            )));
        }
        if self.min_temp >= self.initial_temp {
            return Err(RosterError::Config(format!(
                "min_temp ({}) must be less than initial_temp ({})",
                self.min_temp, self.initial_temp
            )));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(RosterError::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(RosterError::Config(
                "iterations_per_temperature must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temp - 100.0).abs() < 1e-10);
        assert!((config.min_temp - 0.1).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-10);
        assert_eq!(config.iterations_per_temperature, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.initial_solution, InitialSolution::Scarcity);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::default().with_initial_temp(-1.0).validate().is_err());
        assert!(SaConfig::default().with_min_temp(0.0).validate().is_err());
        assert!(SaConfig::default().with_initial_temp(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default().with_initial_temp(10.0).with_min_temp(10.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2] {
            assert!(SaConfig::default().with_cooling_rate(rate).validate().is_err());
        }
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_temperature_levels_default() {
        // floor(ln(0.1 / 100) / ln(0.95)) + 1
        assert_eq!(SaConfig::default().temperature_levels(), 135);
    }

    #[test]
    fn test_temperature_levels_matches_formula() {
        let config = SaConfig::default()
            .with_initial_temp(10.0)
            .with_min_temp(0.3)
            .with_cooling_rate(0.8);
        let expected = ((0.3f64 / 10.0).ln() / 0.8f64.ln()).floor() as usize + 1;
        assert_eq!(config.temperature_levels(), expected);
    }
}
