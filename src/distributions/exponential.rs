//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next Poisson event.
//!
//! Here it is parametrized by its `scale` (the mean time between events),
//! which is the inverse of the rate `lambda`.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution as _, Exp1};

use crate::{distributions::require_positive, errors::DistributionError};

#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    pub const TAG: &'static str = "exponential";

    /// Creates a new [Exponential] distribution. It is required that `scale`
    /// is finite and `0.0 < scale` or an error will be returned.
    ///
    /// Samples are `scale` times an `Exp(1)` draw, which in practice stays
    /// below `~45`. For `scale` above roughly `f64::MAX / 45` (about `4e306`)
    /// a sample may overflow to `+inf`. Up to `~1e300` samples are finite.
    pub fn new(scale: f64) -> Result<Exponential, DistributionError> {
        let scale: f64 = require_positive(Self::TAG, "scale", scale)?;
        return Ok(Exponential { scale });
    }

    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // sampling Exp(1) and scaling avoids computing `1 / scale`, which
        // overflows for tiny scales
        let unit: f64 = Exp1.sample(rng);
        return unit * self.scale;
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponential(scale={})", self.scale)
    }
}
