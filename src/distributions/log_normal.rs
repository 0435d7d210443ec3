//! # Log-normal distribution
//!
//! If `X` follows a [Normal](crate::distributions::Normal) distribution, `exp(X)`
//! follows a [log-normal distribution](https://en.wikipedia.org/wiki/Log-normal_distribution).
//!
//! The parameters are the ones of the underlying normal: `mean` (`mu`) and
//! `sigma`. They are *not* the mean and standard deviation of the samples.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{
    distributions::{require_finite, require_positive},
    errors::DistributionError,
};

#[derive(Debug, Clone)]
pub struct LogNormal {
    mean: f64,
    sigma: f64,
    sampler: rand_distr::LogNormal<f64>,
}

impl LogNormal {
    pub const TAG: &'static str = "lognormal";

    /// Creates a new [LogNormal] distribution. `mean` must be finite and
    /// `sigma` finite and strictly positive.
    ///
    /// A sample is `exp(mean + sigma * z)` with `z` standard normal, so it
    /// overflows to `+inf` whenever `mean + sigma * z > ln(f64::MAX) ~ 709.78`.
    /// Keep `mean + 8 * sigma` under that bound for finite samples
    /// (e.g. `LogNormal::new(710.0, 1.0)` gives `inf` about half the time).
    pub fn new(mean: f64, sigma: f64) -> Result<LogNormal, DistributionError> {
        let mean: f64 = require_finite(Self::TAG, "mean", mean)?;
        let sigma: f64 = require_positive(Self::TAG, "sigma", sigma)?;

        let sampler: rand_distr::LogNormal<f64> = rand_distr::LogNormal::new(mean, sigma)
            .map_err(|e| DistributionError::invalid(Self::TAG, "sigma", e.to_string()))?;

        return Ok(LogNormal {
            mean,
            sigma,
            sampler,
        });
    }

    /// Mean of the underlying normal distribution
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Standard deviation of the underlying normal distribution
    pub const fn get_sigma(&self) -> f64 {
        return self.sigma;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for LogNormal {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.sigma == other.sigma
    }
}

impl fmt::Display for LogNormal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogNormal(mean={}, sigma={})", self.mean, self.sigma)
    }
}
