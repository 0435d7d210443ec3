//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distribution where all possible outcomes in the interval `[low, high]` have
//! equal likelihood of happening.
//!
//! Both ends of the interval can be returned. `low == high` is allowed and
//! always returns that value.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_finite, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Uniform {
    /// The minimum value
    low: f64,
    /// The maximum value
    high: f64,
    sampler: rand::distr::Uniform<f64>,
}

impl Uniform {
    pub const TAG: &'static str = "uniform";

    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `low` indicates the minimum value.
    ///  - `high` indicates the maximum value.
    ///  - `low <= high` must be fulfilled or an error will be returned.
    ///  - `low` and `high` must both be finite values (no `+-inf` or NaNs)
    pub fn new(low: f64, high: f64) -> Result<Uniform, DistributionError> {
        let low: f64 = require_finite(Self::TAG, "low", low)?;
        let high: f64 = require_finite(Self::TAG, "high", high)?;

        if high < low {
            return Err(DistributionError::invalid(
                Self::TAG,
                "high",
                format!("low ({low}) must be less than or equal to high ({high})"),
            ));
        }

        // `high - low` can still overflow for huge finite bounds
        let sampler: rand::distr::Uniform<f64> = rand::distr::Uniform::new_inclusive(low, high)
            .map_err(|e| DistributionError::invalid(Self::TAG, "high", e.to_string()))?;

        return Ok(Uniform { low, high, sampler });
    }

    /// Return `low` (minimum value).
    pub const fn get_low(&self) -> f64 {
        return self.low;
    }

    /// Return `high` (maximum value).
    pub const fn get_high(&self) -> f64 {
        return self.high;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for Uniform {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform(low={}, high={})", self.low, self.high)
    }
}
