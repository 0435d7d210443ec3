//! # Discrete distribution
//!
//! A [categorical distribution](https://en.wikipedia.org/wiki/Categorical_distribution)
//! over an arbitrary, finite set of real values. Value `values[i]` is returned
//! with probability `probs[i]`.
//!
//! The pairing is positional: the values are never sorted or deduplicated, so
//! the order given at construction is the order returned by the getters.

use std::fmt;

use rand::{Rng, distr::weighted::WeightedIndex};
use rand_distr::Distribution as _;

use crate::{
    configuration::DISCRETE_PROBABILITY_TOLERANCE,
    distributions::require_finite,
    errors::DistributionError,
};

#[derive(Debug, Clone)]
pub struct Discrete {
    values: Vec<f64>,
    probs: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl Discrete {
    pub const TAG: &'static str = "discrete";

    /// Creates a new [Discrete] distribution.
    ///
    /// Returns an error if:
    ///  - `values` is empty.
    ///  - `values` and `probs` have different lengths.
    ///  - Any value or probability is not finite.
    ///  - Any probability is negative.
    ///  - The probabilities do not add up to `1.0` (up to
    ///     [DISCRETE_PROBABILITY_TOLERANCE]).
    pub fn new(values: Vec<f64>, probs: Vec<f64>) -> Result<Discrete, DistributionError> {
        if values.is_empty() {
            return Err(DistributionError::invalid(
                Self::TAG,
                "values",
                "at least one value is required",
            ));
        }

        if values.len() != probs.len() {
            return Err(DistributionError::invalid(
                Self::TAG,
                "probs",
                format!(
                    "got {} probabilities for {} values",
                    probs.len(),
                    values.len()
                ),
            ));
        }

        for value in &values {
            require_finite(Self::TAG, "values", *value)?;
        }

        for p in &probs {
            require_finite(Self::TAG, "probs", *p)?;
            if *p < 0.0 {
                return Err(DistributionError::invalid(
                    Self::TAG,
                    "probs",
                    format!("probability {p} is negative"),
                ));
            }
        }

        let total: f64 = probs.iter().sum::<f64>();
        if DISCRETE_PROBABILITY_TOLERANCE < (total - 1.0).abs() {
            return Err(DistributionError::invalid(
                Self::TAG,
                "probs",
                format!("probabilities add up to {total} instead of 1"),
            ));
        }

        let index: WeightedIndex<f64> = WeightedIndex::new(&probs)
            .map_err(|e| DistributionError::invalid(Self::TAG, "probs", e.to_string()))?;

        return Ok(Discrete {
            values,
            probs,
            index,
        });
    }

    pub fn get_values(&self) -> &[f64] {
        return &self.values;
    }

    pub fn get_probs(&self) -> &[f64] {
        return &self.probs;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let i: usize = self.index.sample(rng);
        return self.values[i];
    }
}

impl PartialEq for Discrete {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.probs == other.probs
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discrete(values={:?}, probs={:?})", self.values, self.probs)
    }
}
