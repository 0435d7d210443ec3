//! # Fixed value
//!
//! The [degenerate distribution](https://en.wikipedia.org/wiki/Degenerate_distribution):
//! all the probability is on a single value, so sampling always returns it.
//!
//! Useful as a stand in for an input that is not actually uncertain, so the
//! simulation can treat every input the same way.

use std::fmt;

use rand::Rng;

use crate::{
    distributions::{Distribution, require_finite},
    errors::DistributionError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FixedValue {
    value: f64,
}

impl FixedValue {
    pub const TAG: &'static str = "fixed";

    /// Creates a new [FixedValue]. `value` must be finite.
    pub fn new(value: f64) -> Result<FixedValue, DistributionError> {
        let value: f64 = require_finite(Self::TAG, "value", value)?;
        return Ok(FixedValue { value });
    }

    pub const fn get_value(&self) -> f64 {
        return self.value;
    }

    /// Returns the value. `rng` is not used.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let _ = rng;
        return self.value;
    }
}

impl TryFrom<f64> for Distribution {
    type Error = DistributionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        return Ok(Distribution::Fixed(FixedValue::new(value)?));
    }
}

impl fmt::Display for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed(value={})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::random_source::seeded;

    use super::*;

    #[test]
    fn ignores_the_random_source() {
        let fixed: FixedValue = FixedValue::new(-2.5).unwrap();
        let mut rng = seeded(1);
        for _ in 0..10 {
            assert_eq!(fixed.sample(&mut rng), -2.5);
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert!(FixedValue::new(f64::NAN).is_err());
        assert!(FixedValue::new(f64::NEG_INFINITY).is_err());
        assert!(Distribution::try_from(f64::INFINITY).is_err());
    }
}
