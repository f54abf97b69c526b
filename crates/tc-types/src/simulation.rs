//! Simulated terminal-value distributions.

use serde::{Deserialize, Serialize};

use crate::errors::TcResult;
use crate::insufficient_data;

/// The terminal portfolio values produced by one Monte Carlo run.
///
/// The collection is an unordered multiset and is never mutated after
/// creation; downstream consumers (the risk calculator, external
/// visualization) only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    values: Vec<f64>,
}

impl SimulationResult {
    pub fn new(values: Vec<f64>) -> TcResult<Self> {
        if values.is_empty() {
            return Err(insufficient_data!("simulation produced no values"));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
