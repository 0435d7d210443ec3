//! Uses distributions in place of plain numbers inside a Monte Carlo loop.
//!
//! Run with `RUST_LOG=debug` to see every specification being built.

use osrisk::{Distribution, from_specs, random_source::seeded};
use serde_json::json;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> Result<(), osrisk::DistributionError> {
    let fmt_layer = tracing_subscriber::fmt::layer().compact().without_time();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    let params = json!({
        "duration": { "type": "weibull", "shape": 1.5, "scale": 10.0 },
        "cost": { "type": "normal", "mean": 1000.0, "std": 100.0 },
        "downtime_factor": { "type": "uniform", "low": 0.8, "high": 1.2 },
    });
    let Some(params) = params.as_object() else {
        unreachable!("the literal above is an object");
    };

    let inputs = from_specs(params)?;
    let duration: &Distribution = &inputs["duration"];
    let cost: &Distribution = &inputs["cost"];
    let downtime_factor: &Distribution = &inputs["downtime_factor"];

    let n: usize = 1000;
    let mut rng = seeded(42);
    let results: Vec<f64> = (0..n)
        .map(|_| duration.sample(&mut rng) * cost.sample(&mut rng) * downtime_factor.sample(&mut rng))
        .collect();

    let mean: f64 = results.iter().sum::<f64>() / n as f64;
    info!("Simulated {n} trials. Mean outcome: {mean:.2}");

    return Ok(());
}
