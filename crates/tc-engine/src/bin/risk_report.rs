//! Demo runner: synthesize a price history, run the pipeline, print the
//! JSON report to stdout.

use rand_distr::Normal;
use tracing_subscriber::EnvFilter;

use tc_engine::{NoiseSource, RiskEngine};
use tc_types::SimulationConfig;

/// Seeded synthetic daily price walk, stand-in for the external data
/// provider.
fn synthetic_prices(seed: u64, days: usize) -> Vec<f64> {
    let mut noise = NoiseSource::new(seed);
    let step_dist = Normal::new(0.0003, 0.011).expect("valid synthetic parameters");

    let mut prices = Vec::with_capacity(days);
    let mut price = 100.0;
    for _ in 0..days {
        price *= noise.cumulative_log_return(&step_dist, 1).exp();
        prices.push(price);
    }
    prices
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = env_parse::<u64>("TAILCAST_SEED").unwrap_or(42);
    let paths = env_parse::<usize>("TAILCAST_PATHS").unwrap_or(10_000);
    let horizon = env_parse::<u32>("TAILCAST_HORIZON").unwrap_or(30);

    let config = SimulationConfig::new(100_000.0)
        .with_horizon(horizon)
        .with_path_count(paths)
        .with_seed(seed);

    let engine = RiskEngine::new(config)?;
    let prices = synthetic_prices(seed, 250);
    let report = engine.run_from_prices(&prices)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
