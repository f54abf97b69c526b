//! Monte Carlo path simulation under GBM.
//!
//! Every path is statistically independent, so the ensemble is generated
//! with a rayon parallel loop. Each path derives its own ChaCha stream from
//! the run seed and the path index; results for a fixed seed are
//! bit-identical regardless of worker count or scheduling.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use tracing::debug;

use tc_types::invalid_parameter;
use tc_types::{SimulationConfig, SimulationResult, StepParameters, TcResult};

/// Seeded source of normal draws for one simulation path.
pub struct NoiseSource {
    rng: ChaCha20Rng,
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Derive the stream for one path from the run seed and path index.
    pub fn for_path(run_seed: u64, path_index: u64) -> Self {
        let seed = run_seed.wrapping_add(path_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self::new(seed)
    }

    /// Sum of `steps` i.i.d. draws from the given normal distribution: the
    /// path's cumulative log return over the horizon.
    pub fn cumulative_log_return(&mut self, step_dist: &Normal<f64>, steps: u32) -> f64 {
        (0..steps).map(|_| step_dist.sample(&mut self.rng)).sum()
    }
}

/// Stateless Monte Carlo path simulator.
pub struct PathSimulator;

impl PathSimulator {
    /// Simulate `config.path_count` terminal portfolio values.
    ///
    /// Each path sums `forecast_horizon` draws from
    /// `Normal(mu_step, sigma_step)` and maps the cumulative log return `L`
    /// to `initial_investment * exp(L)`. Summing in log space avoids the
    /// compounding error of multiplying per-step gross returns.
    pub fn simulate(
        step: &StepParameters,
        config: &SimulationConfig,
    ) -> TcResult<SimulationResult> {
        config.validate()?;
        if !step.mu_step.is_finite() {
            return Err(invalid_parameter!(
                "mu_step",
                "must be finite, got {}",
                step.mu_step
            ));
        }
        if !step.sigma_step.is_finite() || step.sigma_step < 0.0 {
            return Err(invalid_parameter!(
                "sigma_step",
                "must be a non-negative finite value, got {}",
                step.sigma_step
            ));
        }

        let step_dist = Normal::new(step.mu_step, step.sigma_step)
            .map_err(|e| invalid_parameter!("sigma_step", "{e}"))?;
        let run_seed = config.random_seed.unwrap_or_else(rand::random);

        debug!(
            run_seed,
            paths = config.path_count,
            steps = config.forecast_horizon,
            "simulating terminal values"
        );

        let initial_investment = config.initial_investment;
        let horizon = config.forecast_horizon;
        let values: Vec<f64> = (0..config.path_count)
            .into_par_iter()
            .map(|path_index| {
                let mut noise = NoiseSource::for_path(run_seed, path_index as u64);
                let log_return = noise.cumulative_log_return(&step_dist, horizon);
                initial_investment * log_return.exp()
            })
            .collect();

        SimulationResult::new(values)
    }
}
