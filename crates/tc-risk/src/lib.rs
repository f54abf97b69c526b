//! Tail-risk metrics for TailCast.
//!
//! Provides:
//! - VaR/CVaR computation over a simulated terminal-value distribution
//! - The run-level [`RiskReport`] envelope handed to reporting collaborators

pub mod metrics;
pub mod report;

pub use metrics::{RiskMetrics, RiskMetricsCalculator};
pub use report::{DistributionSummary, RiskReport};
