//! TailCast risk estimation engine.
//!
//! Estimates short-horizon portfolio risk by simulating terminal values
//! under Geometric Brownian Motion and summarizing the distribution with
//! VaR/CVaR. The pipeline runs strictly forward:
//!
//! historical log returns → annualized drift/volatility → per-step
//! parameters → simulated terminal-value ensemble → tail-risk metrics.
//!
//! Each stage is a pure function of its inputs; [`RiskEngine`] only chains
//! them and carries the immutable [`SimulationConfig`].

pub mod estimator;
pub mod simulator;

pub use estimator::ParameterEstimator;
pub use simulator::{NoiseSource, PathSimulator};

use tracing::info;

use tc_risk::{RiskMetricsCalculator, RiskReport};
use tc_types::{LogReturnSeries, SimulationConfig, TcResult};

/// End-to-end risk estimation pipeline.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    config: SimulationConfig,
}

impl RiskEngine {
    /// Create an engine for the given run configuration.
    ///
    /// The configuration is validated once here; the individual stages
    /// revalidate their own inputs when called directly.
    pub fn new(config: SimulationConfig) -> TcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the full pipeline on a historical log-return series.
    pub fn run(&self, returns: &LogReturnSeries) -> TcResult<RiskReport> {
        info!(
            observations = returns.len(),
            paths = self.config.path_count,
            horizon = self.config.forecast_horizon,
            "starting risk estimation run"
        );

        let parameters =
            ParameterEstimator::estimate(returns, self.config.annualization_factor)?;
        let step_parameters = ParameterEstimator::to_step_parameters(&parameters)?;
        let result = PathSimulator::simulate(&step_parameters, &self.config)?;
        let metrics = RiskMetricsCalculator::compute(
            &result,
            self.config.initial_investment,
            self.config.confidence_level,
        )?;

        info!(
            var_loss = metrics.var_loss,
            cvar_loss = metrics.cvar_loss,
            "risk estimation run complete"
        );

        Ok(RiskReport::new(
            self.config.clone(),
            parameters,
            step_parameters,
            &result,
            metrics,
        ))
    }

    /// Run the pipeline from a cleaned, chronologically ordered price
    /// history.
    pub fn run_from_prices(&self, prices: &[f64]) -> TcResult<RiskReport> {
        let returns = LogReturnSeries::from_prices(prices)?;
        self.run(&returns)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
