//! Estimated GBM parameters.

use serde::{Deserialize, Serialize};

/// Annualized GBM drift and volatility estimated from historical returns.
///
/// Immutable once computed; consumed by the path simulator after
/// de-annualization to [`StepParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Annualized drift (mean log return × annualization factor).
    pub mu_annual: f64,
    /// Annualized volatility (sample std dev × sqrt of annualization factor).
    pub sigma_annual: f64,
    /// Trading periods per year used for the annualization (e.g. 252).
    pub annualization_factor: u32,
}

/// Per-step GBM parameters for the simulation horizon.
///
/// `mu_step` already carries the Itô correction, so it is the drift of the
/// *log* of the step-level process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParameters {
    pub mu_step: f64,
    pub sigma_step: f64,
}
