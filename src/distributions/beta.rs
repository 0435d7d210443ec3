//! # Beta distribution
//!
//! The [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution)
//! is a continuous probability distribution. It's domain is just `[0.0, 1.0]`
//! (which can be useful to model probabilities or fractions). It has 2
//! parameters: alpha and beta.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_positive, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    sampler: rand_distr::Beta<f64>,
}

impl Beta {
    pub const TAG: &'static str = "beta";

    /// Creates a new [Beta] distribution with parameters `alpha` and `beta`.
    ///
    ///  - `alpha` must be finite and be strictly positive.
    ///  - `beta` must be finite and be strictly positive.
    ///
    /// Otherwise an error will be returned.
    pub fn new(alpha: f64, beta: f64) -> Result<Beta, DistributionError> {
        let alpha: f64 = require_positive(Self::TAG, "alpha", alpha)?;
        let beta: f64 = require_positive(Self::TAG, "beta", beta)?;

        let sampler: rand_distr::Beta<f64> = rand_distr::Beta::new(alpha, beta)
            .map_err(|e| DistributionError::invalid(Self::TAG, "alpha", e.to_string()))?;

        return Ok(Beta {
            alpha,
            beta,
            sampler,
        });
    }

    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for Beta {
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha && self.beta == other.beta
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beta(alpha={}, beta={})", self.alpha, self.beta)
    }
}
