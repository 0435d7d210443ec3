//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters:
//!
//! 1. `shape` (`alpha` or `k`)
//! 2. `scale` (`theta`)
//!
//! The rate parametrization (`lambda = 1/theta`) is not used here.
//!
//! All parameters are strictly positive.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_positive, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Gamma {
    /// alpha or shape
    shape: f64,
    /// theta or scale
    scale: f64,
    sampler: rand_distr::Gamma<f64>,
}

impl Gamma {
    pub const TAG: &'static str = "gamma";

    /// Creates a new [Gamma] distribution with parameters `shape` and `scale`.
    ///
    /// It will return error under the following conditions:
    ///  - `shape` is `+-inf` or a NaN
    ///  - `scale` is `+-inf` or a NaN
    ///  - `shape <= 0.0`
    ///  - `scale <= 0.0`
    ///
    pub fn new(shape: f64, scale: f64) -> Result<Gamma, DistributionError> {
        let shape: f64 = require_positive(Self::TAG, "shape", shape)?;
        let scale: f64 = require_positive(Self::TAG, "scale", scale)?;

        let sampler: rand_distr::Gamma<f64> = rand_distr::Gamma::new(shape, scale)
            .map_err(|e| DistributionError::invalid(Self::TAG, "shape", e.to_string()))?;

        return Ok(Gamma {
            shape,
            scale,
            sampler,
        });
    }

    /// Get the parameter shape
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

impl PartialEq for Gamma {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.scale == other.scale
    }
}

impl fmt::Display for Gamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gamma(shape={}, scale={})", self.shape, self.scale)
    }
}
