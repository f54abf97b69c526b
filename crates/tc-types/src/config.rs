//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::errors::TcResult;
use crate::invalid_parameter;

/// Default forecast horizon in trading steps.
pub const DEFAULT_FORECAST_HORIZON: u32 = 30;
/// Default number of simulated paths.
pub const DEFAULT_PATH_COUNT: usize = 10_000;
/// Default VaR/CVaR confidence level.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;
/// Default trading periods per year.
pub const DEFAULT_ANNUALIZATION_FACTOR: u32 = 252;

/// Immutable configuration for a single simulation run.
///
/// Passed explicitly through the pipeline; there is no process-wide
/// configuration state shared between stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting portfolio value, in currency units.
    pub initial_investment: f64,
    /// Number of trading steps to simulate forward.
    pub forecast_horizon: u32,
    /// Number of independent paths in the ensemble.
    pub path_count: usize,
    /// Confidence level for VaR/CVaR, in (0, 1).
    pub confidence_level: f64,
    /// Trading periods per year.
    pub annualization_factor: u32,
    /// Seed for reproducible runs. `None` draws a fresh seed per run.
    pub random_seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(initial_investment: f64) -> Self {
        Self {
            initial_investment,
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            path_count: DEFAULT_PATH_COUNT,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            annualization_factor: DEFAULT_ANNUALIZATION_FACTOR,
            random_seed: None,
        }
    }

    pub fn with_horizon(mut self, steps: u32) -> Self {
        self.forecast_horizon = steps;
        self
    }

    pub fn with_path_count(mut self, paths: usize) -> Self {
        self.path_count = paths;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_annualization_factor(mut self, factor: u32) -> Self {
        self.annualization_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> TcResult<()> {
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(invalid_parameter!(
                "initial_investment",
                "must be a positive finite value, got {}",
                self.initial_investment
            ));
        }
        if self.forecast_horizon == 0 {
            return Err(invalid_parameter!("forecast_horizon", "must be >= 1"));
        }
        if self.path_count == 0 {
            return Err(invalid_parameter!("path_count", "must be >= 1"));
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(invalid_parameter!(
                "confidence_level",
                "must lie in (0, 1), got {}",
                self.confidence_level
            ));
        }
        if self.annualization_factor == 0 {
            return Err(invalid_parameter!("annualization_factor", "must be >= 1"));
        }
        Ok(())
    }

    /// Forecast horizon expressed in years.
    pub fn horizon_years(&self) -> f64 {
        f64::from(self.forecast_horizon) / f64::from(self.annualization_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TcError;

    #[test]
    fn defaults() {
        let config = SimulationConfig::new(100_000.0);
        assert_eq!(config.forecast_horizon, 30);
        assert_eq!(config.path_count, 10_000);
        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.annualization_factor, 252);
        assert!(config.random_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let config = SimulationConfig::new(50_000.0)
            .with_horizon(10)
            .with_path_count(500)
            .with_confidence_level(0.95)
            .with_annualization_factor(365)
            .with_seed(42);

        assert_eq!(config.forecast_horizon, 10);
        assert_eq!(config.path_count, 500);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.annualization_factor, 365);
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn validation_rejects_out_of_domain_fields() {
        let base = SimulationConfig::new(100_000.0);

        let cases = [
            SimulationConfig {
                initial_investment: 0.0,
                ..base.clone()
            },
            SimulationConfig {
                initial_investment: f64::NAN,
                ..base.clone()
            },
            SimulationConfig {
                forecast_horizon: 0,
                ..base.clone()
            },
            SimulationConfig {
                path_count: 0,
                ..base.clone()
            },
            SimulationConfig {
                confidence_level: 0.0,
                ..base.clone()
            },
            SimulationConfig {
                confidence_level: 1.0,
                ..base.clone()
            },
            SimulationConfig {
                annualization_factor: 0,
                ..base.clone()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(TcError::InvalidParameter { .. })),
                "expected rejection for {config:?}"
            );
        }
    }

    #[test]
    fn horizon_years() {
        let config = SimulationConfig::new(100_000.0)
            .with_horizon(252)
            .with_annualization_factor(252);
        assert!((config.horizon_years() - 1.0).abs() < 1e-12);
    }
}
