//! Risk-parameter estimation.
//!
//! Converts a historical [`LogReturnSeries`] into annualized GBM
//! drift/volatility, and de-annualizes those into the per-step parameters
//! the path simulator consumes.

use tracing::debug;

use tc_types::{insufficient_data, invalid_parameter};
use tc_types::{LogReturnSeries, RiskParameters, StepParameters, TcResult};

/// Stateless estimator for GBM risk parameters.
pub struct ParameterEstimator;

impl ParameterEstimator {
    /// Estimate annualized drift and volatility from historical log returns.
    ///
    /// `mu_annual` is the mean log return scaled by the annualization
    /// factor; `sigma_annual` is the sample standard deviation (n - 1
    /// denominator) scaled by its square root. Needs at least two returns,
    /// since the sample deviation is undefined for one observation.
    pub fn estimate(
        returns: &LogReturnSeries,
        annualization_factor: u32,
    ) -> TcResult<RiskParameters> {
        if annualization_factor == 0 {
            return Err(invalid_parameter!("annualization_factor", "must be >= 1"));
        }
        let values = returns.values();
        if values.len() < 2 {
            return Err(insufficient_data!(
                "need at least 2 log returns to estimate volatility, got {}",
                values.len()
            ));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

        let factor = f64::from(annualization_factor);
        let mu_annual = mean * factor;
        let sigma_annual = variance.sqrt() * factor.sqrt();

        debug!(mu_annual, sigma_annual, "estimated annualized parameters");

        Ok(RiskParameters {
            mu_annual,
            sigma_annual,
            annualization_factor,
        })
    }

    /// Convert annualized parameters to per-step drift and volatility.
    ///
    /// The step drift subtracts the Itô correction `0.5 * sigma_step^2`,
    /// making `mu_step` the drift of the log of the step-level process.
    /// Without it the simulated lognormal mean would overshoot
    /// `initial_investment * exp(mu_annual * horizon_years)`.
    pub fn to_step_parameters(params: &RiskParameters) -> TcResult<StepParameters> {
        if params.annualization_factor == 0 {
            return Err(invalid_parameter!("annualization_factor", "must be >= 1"));
        }
        if !params.sigma_annual.is_finite() || params.sigma_annual < 0.0 {
            return Err(invalid_parameter!(
                "sigma_annual",
                "must be a non-negative finite value, got {}",
                params.sigma_annual
            ));
        }
        if !params.mu_annual.is_finite() {
            return Err(invalid_parameter!(
                "mu_annual",
                "must be finite, got {}",
                params.mu_annual
            ));
        }

        let factor = f64::from(params.annualization_factor);
        let sigma_step = params.sigma_annual / factor.sqrt();
        let mu_step = params.mu_annual / factor - 0.5 * sigma_step * sigma_step;

        Ok(StepParameters { mu_step, sigma_step })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_types::TcError;

    #[test]
    fn estimate_known_series() {
        // Mean 0.001, sample variance 2e-6 over the two observations.
        let returns = LogReturnSeries::new(vec![0.002, 0.0]).unwrap();
        let params = ParameterEstimator::estimate(&returns, 252).unwrap();

        assert!((params.mu_annual - 0.001 * 252.0).abs() < 1e-12);
        let expected_sigma = (2e-6f64).sqrt() * (252.0f64).sqrt();
        assert!((params.sigma_annual - expected_sigma).abs() < 1e-12);
        assert_eq!(params.annualization_factor, 252);
    }

    #[test]
    fn estimate_constant_series_has_zero_volatility() {
        let returns = LogReturnSeries::new(vec![0.01; 100]).unwrap();
        let params = ParameterEstimator::estimate(&returns, 252).unwrap();
        assert!((params.mu_annual - 0.01 * 252.0).abs() < 1e-9);
        assert!(params.sigma_annual.abs() < 1e-12);
    }

    #[test]
    fn sigma_is_never_negative() {
        let returns =
            LogReturnSeries::new(vec![-0.03, 0.02, -0.015, 0.007, -0.001]).unwrap();
        let params = ParameterEstimator::estimate(&returns, 252).unwrap();
        assert!(params.sigma_annual >= 0.0);
    }

    #[test]
    fn estimate_rejects_short_series() {
        let single = LogReturnSeries::new(vec![0.01]).unwrap();
        let err = ParameterEstimator::estimate(&single, 252).unwrap_err();
        assert!(matches!(err, TcError::InsufficientData { .. }));
    }

    #[test]
    fn estimate_rejects_zero_factor() {
        let returns = LogReturnSeries::new(vec![0.01, -0.01]).unwrap();
        let err = ParameterEstimator::estimate(&returns, 0).unwrap_err();
        assert!(matches!(err, TcError::InvalidParameter { .. }));
    }

    #[test]
    fn step_parameters_carry_ito_correction() {
        let params = RiskParameters {
            mu_annual: 0.252,
            sigma_annual: 0.252,
            annualization_factor: 252,
        };
        let step = ParameterEstimator::to_step_parameters(&params).unwrap();

        let expected_sigma = 0.252 / (252.0f64).sqrt();
        assert!((step.sigma_step - expected_sigma).abs() < 1e-12);
        let expected_mu = 0.001 - 0.5 * expected_sigma * expected_sigma;
        assert!((step.mu_step - expected_mu).abs() < 1e-12);
    }

    #[test]
    fn zero_volatility_step_drift_is_plain_deannualization() {
        let params = RiskParameters {
            mu_annual: 0.0504,
            sigma_annual: 0.0,
            annualization_factor: 252,
        };
        let step = ParameterEstimator::to_step_parameters(&params).unwrap();
        assert_eq!(step.sigma_step, 0.0);
        assert!((step.mu_step - 0.0002).abs() < 1e-12);
    }

    #[test]
    fn step_parameters_reject_negative_sigma() {
        let params = RiskParameters {
            mu_annual: 0.05,
            sigma_annual: -0.1,
            annualization_factor: 252,
        };
        let err = ParameterEstimator::to_step_parameters(&params).unwrap_err();
        assert!(matches!(err, TcError::InvalidParameter { .. }));
    }
}
