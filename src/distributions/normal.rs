//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! (also called Gaussian) is parametrized by its `mean` and its standard
//! deviation `std`.
//!
//! A `std` of `0.0` is allowed and always returns the `mean`.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{
    distributions::{require_finite, require_non_negative},
    errors::DistributionError,
};

#[derive(Debug, Clone)]
pub struct Normal {
    mean: f64,
    std: f64,
    sampler: rand_distr::Normal<f64>,
}

impl Normal {
    pub const TAG: &'static str = "normal";

    /// Creates a new [Normal] distribution.
    ///
    ///  - `mean` must be finite.
    ///  - `std` must be finite and `0.0 <= std`.
    ///
    /// Otherwise an error will be returned.
    pub fn new(mean: f64, std: f64) -> Result<Normal, DistributionError> {
        let mean: f64 = require_finite(Self::TAG, "mean", mean)?;
        let std: f64 = require_non_negative(Self::TAG, "std", std)?;

        let sampler: rand_distr::Normal<f64> = rand_distr::Normal::new(mean, std)
            .map_err(|e| DistributionError::invalid(Self::TAG, "std", e.to_string()))?;

        return Ok(Normal { mean, std, sampler });
    }

    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    pub const fn get_std(&self) -> f64 {
        return self.std;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for Normal {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.std == other.std
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal(mean={}, std={})", self.mean, self.std)
    }
}
