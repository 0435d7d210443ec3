//! # Weibull distribution
//!
//! The [Weibull distribution](https://en.wikipedia.org/wiki/Weibull_distribution)
//! is a continuous distribution on `[0, inf)` commonly used for times to
//! failure. It has 2 strictly positive parameters: `shape` (`k`) and `scale`
//! (`lambda`).
//!
//!  - `shape < 1`: the failure rate decreases over time.
//!  - `shape == 1`: it is an [Exponential](crate::distributions::Exponential)
//!     with the same `scale`.
//!  - `shape > 1`: the failure rate increases over time.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_positive, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Weibull {
    shape: f64,
    scale: f64,
    sampler: rand_distr::Weibull<f64>,
}

impl Weibull {
    pub const TAG: &'static str = "weibull";

    /// Creates a new [Weibull] distribution. Both `shape` and `scale` must be
    /// finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Result<Weibull, DistributionError> {
        let shape: f64 = require_positive(Self::TAG, "shape", shape)?;
        let scale: f64 = require_positive(Self::TAG, "scale", scale)?;

        // note the argument order: `rand_distr` takes the scale first
        let sampler: rand_distr::Weibull<f64> = rand_distr::Weibull::new(scale, shape)
            .map_err(|e| DistributionError::invalid(Self::TAG, "shape", e.to_string()))?;

        return Ok(Weibull {
            shape,
            scale,
            sampler,
        });
    }

    pub const fn get_shape(&self) -> f64 {
        return self.shape;
    }

    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for Weibull {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.scale == other.scale
    }
}

impl fmt::Display for Weibull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weibull(shape={}, scale={})", self.shape, self.scale)
    }
}
