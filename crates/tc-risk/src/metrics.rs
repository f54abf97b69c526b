//! VaR/CVaR computation.
//!
//! [`RiskMetricsCalculator`] summarizes a simulated terminal-value
//! distribution into percentile-based loss estimates at a chosen confidence
//! level.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tc_types::{insufficient_data, invalid_parameter};
use tc_types::{SimulationResult, TcResult};

/// Tail-risk metrics of a simulated distribution at one confidence level.
///
/// Losses are measured against the initial investment: a negative loss means
/// the corresponding percentile ended above the starting value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub confidence_level: f64,
    /// Portfolio value at the (1 - confidence) percentile.
    pub var_value: f64,
    /// Loss at the VaR percentile: `initial_investment - var_value`.
    pub var_loss: f64,
    /// Mean portfolio value of the left tail at or beyond VaR.
    pub cvar_value: f64,
    /// Expected shortfall: `initial_investment - cvar_value`.
    pub cvar_loss: f64,
}

/// Stateless calculator for VaR and CVaR.
pub struct RiskMetricsCalculator;

impl RiskMetricsCalculator {
    /// Compute VaR/CVaR of `result` at `confidence_level`.
    ///
    /// Percentile semantics are linear interpolation between order
    /// statistics. CVaR averages every simulated value at or below the VaR
    /// threshold, so `cvar_loss >= var_loss` always.
    pub fn compute(
        result: &SimulationResult,
        initial_investment: f64,
        confidence_level: f64,
    ) -> TcResult<RiskMetrics> {
        if !confidence_level.is_finite() || confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(invalid_parameter!(
                "confidence_level",
                "must lie in (0, 1), got {confidence_level}"
            ));
        }
        if !initial_investment.is_finite() || initial_investment <= 0.0 {
            return Err(invalid_parameter!(
                "initial_investment",
                "must be a positive finite value, got {initial_investment}"
            ));
        }
        if result.is_empty() {
            return Err(insufficient_data!(
                "cannot compute risk metrics of an empty simulation result"
            ));
        }

        let mut sorted = result.values().to_vec();
        sorted.sort_by(f64::total_cmp);

        let var_quantile = 1.0 - confidence_level;
        let var_value = percentile(&sorted, var_quantile);
        let var_loss = initial_investment - var_value;

        // The interpolated percentile never falls below the sample minimum,
        // so the tail holds at least one value.
        let tail_len = sorted.partition_point(|&v| v <= var_value);
        let tail = &sorted[..tail_len.max(1)];
        let cvar_value = tail.iter().sum::<f64>() / tail.len() as f64;
        let cvar_loss = initial_investment - cvar_value;

        debug!(
            confidence_level,
            var_value, var_loss, cvar_value, cvar_loss, "computed risk metrics"
        );

        Ok(RiskMetrics {
            confidence_level,
            var_value,
            var_loss,
            cvar_value,
            cvar_loss,
        })
    }
}

/// Percentile of an ascending-sorted sample with linear interpolation
/// between order statistics (rank `q * (n - 1)`).
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = rank - lo as f64;
    sorted[lo] * (1.0 - weight) + sorted[hi] * weight
}
