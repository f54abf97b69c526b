//! Run-level risk report.
//!
//! [`RiskReport`] is the serializable record of one complete simulation run:
//! the configuration, the estimated parameters, a summary of the simulated
//! distribution, and the tail-risk metrics. Reporting and visualization
//! collaborators consume it; presentation is their concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tc_types::{RiskParameters, SimulationConfig, SimulationResult, StepParameters};

use crate::metrics::RiskMetrics;

/// Summary statistics of a simulated terminal-value distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub path_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl DistributionSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            path_count: result.len(),
            mean: result.mean(),
            min: result.min(),
            max: result.max(),
        }
    }
}

/// A point-in-time record of one risk estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub config: SimulationConfig,
    pub parameters: RiskParameters,
    pub step_parameters: StepParameters,
    pub distribution: DistributionSummary,
    pub metrics: RiskMetrics,
}

impl RiskReport {
    pub fn new(
        config: SimulationConfig,
        parameters: RiskParameters,
        step_parameters: StepParameters,
        result: &SimulationResult,
        metrics: RiskMetrics,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            config,
            parameters,
            step_parameters,
            distribution: DistributionSummary::from_result(result),
            metrics,
        }
    }
}
