//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lam`. It
//! represents the average number of events that happen in a given amount of time.
//!
//! Samples are whole numbers, but they are returned as [f64] like every other
//! distribution. A rate of `0` is allowed: no event ever happens and every
//! sample is `0.0`.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_non_negative, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Poisson {
    lam: f64,
    /// `None` when `lam == 0`, the sampler does not accept it.
    sampler: Option<rand_distr::Poisson<f64>>,
}

impl Poisson {
    pub const TAG: &'static str = "poisson";

    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lam` indicates rate. And must fulfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 <= lam`
    ///      - Be small enough for the sampler (around `1.8e19`)
    ///
    /// Otherwise an error will be returned.
    pub fn new(lam: f64) -> Result<Poisson, DistributionError> {
        let lam: f64 = require_non_negative(Self::TAG, "lam", lam)?;

        if lam == 0.0 {
            return Ok(Poisson { lam, sampler: None });
        }

        let sampler: rand_distr::Poisson<f64> = rand_distr::Poisson::new(lam)
            .map_err(|e| DistributionError::invalid(Self::TAG, "lam", e.to_string()))?;

        return Ok(Poisson {
            lam,
            sampler: Some(sampler),
        });
    }

    /// Returns the value of `lam`
    pub const fn get_lam(&self) -> f64 {
        return self.lam;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return match &self.sampler {
            Some(sampler) => sampler.sample(rng),
            None => 0.0,
        };
    }
}

impl PartialEq for Poisson {
    fn eq(&self, other: &Self) -> bool {
        self.lam == other.lam
    }
}

impl fmt::Display for Poisson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poisson(lam={})", self.lam)
    }
}
