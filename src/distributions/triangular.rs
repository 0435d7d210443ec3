//! # Triangular distribution
//!
//! The [triangular distribution](https://en.wikipedia.org/wiki/Triangular_distribution)
//! has a pdf shaped like a triangle: it starts at `left`, peaks at `mode` and
//! ends at `right`. It is the usual choice when an expert can only give a
//! minimum, a most likely and a maximum value.

use std::fmt;

use rand::Rng;
use rand_distr::Distribution as _;

use crate::{distributions::require_finite, errors::DistributionError};

#[derive(Debug, Clone)]
pub struct Triangular {
    left: f64,
    mode: f64,
    right: f64,
    sampler: rand_distr::Triangular<f64>,
}

impl Triangular {
    pub const TAG: &'static str = "triangular";

    /// Creates a new [Triangular] distribution.
    ///
    /// All parameters must be finite and `left <= mode <= right`.
    pub fn new(left: f64, mode: f64, right: f64) -> Result<Triangular, DistributionError> {
        let left: f64 = require_finite(Self::TAG, "left", left)?;
        let mode: f64 = require_finite(Self::TAG, "mode", mode)?;
        let right: f64 = require_finite(Self::TAG, "right", right)?;

        if mode < left {
            return Err(DistributionError::invalid(
                Self::TAG,
                "mode",
                format!("mode ({mode}) is smaller than left ({left})"),
            ));
        }
        if right < mode {
            return Err(DistributionError::invalid(
                Self::TAG,
                "mode",
                format!("mode ({mode}) is larger than right ({right})"),
            ));
        }

        // (min, max, mode)
        let sampler: rand_distr::Triangular<f64> = rand_distr::Triangular::new(left, right, mode)
            .map_err(|e| DistributionError::invalid(Self::TAG, "mode", e.to_string()))?;

        return Ok(Triangular {
            left,
            mode,
            right,
            sampler,
        });
    }

    pub const fn get_left(&self) -> f64 {
        return self.left;
    }

    pub const fn get_mode(&self) -> f64 {
        return self.mode;
    }

    pub const fn get_right(&self) -> f64 {
        return self.right;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.sampler.sample(rng);
    }
}

impl PartialEq for Triangular {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.mode == other.mode && self.right == other.right
    }
}

impl fmt::Display for Triangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangular(left={}, mode={}, right={})",
            self.left, self.mode, self.right
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::random_source::seeded;

    use super::*;

    #[test]
    fn mean_is_average_of_the_corners() {
        let triangular: Triangular = Triangular::new(0.0, 2.0, 10.0).unwrap();
        let mut rng = seeded(17);
        let n: usize = 50_000;
        let mean: f64 = (0..n).map(|_| triangular.sample(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 4.0).abs() < 0.1, "mean: {mean}");
    }

    #[test]
    fn mode_at_the_edges() {
        assert!(Triangular::new(0.0, 0.0, 1.0).is_ok());
        assert!(Triangular::new(0.0, 1.0, 1.0).is_ok());
        assert!(Triangular::new(0.0, 1.5, 1.0).is_err());
        assert!(Triangular::new(0.0, -0.5, 1.0).is_err());
    }
}
