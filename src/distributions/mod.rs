//! # Distributions
//!
//! The closed set of distribution families supported by the library. Each
//! family lives in its own module and can be used on its own, but most callers
//! only handle the [Distribution] enum, usually obtained through
//! [from_spec](crate::spec::from_spec).
//!
//! All families share the same contract:
//!
//!  - Parameters are validated by `new` and never change afterwards.
//!  - `sample(rng)` reads the random source and returns one `f64`. It never
//!     fails and it is deterministic given the state of `rng`.

use std::fmt;

use rand::Rng;
use serde_json::{Value, json};

use crate::errors::DistributionError;

// Continuous
pub mod beta;
pub mod exponential;
pub mod gamma;
pub mod log_normal;
pub mod normal;
pub mod triangular;
pub mod uniform;
pub mod weibull;

// Discrete
pub mod discrete;
pub mod fixed;
pub mod poisson;

pub use beta::Beta;
pub use discrete::Discrete;
pub use exponential::Exponential;
pub use fixed::FixedValue;
pub use gamma::Gamma;
pub use log_normal::LogNormal;
pub use normal::Normal;
pub use poisson::Poisson;
pub use triangular::Triangular;
pub use uniform::Uniform;
pub use weibull::Weibull;

/// A probability distribution that can be sampled.
///
/// Two distributions are equal if they are the same family with the same
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Fixed(FixedValue),
    Normal(Normal),
    Weibull(Weibull),
    Uniform(Uniform),
    Triangular(Triangular),
    LogNormal(LogNormal),
    Exponential(Exponential),
    Gamma(Gamma),
    Beta(Beta),
    Poisson(Poisson),
    Discrete(Discrete),
}

impl Distribution {
    /// Draws a single sample using `rng`.
    ///
    /// Given the same `rng` state the result is always the same, which is what
    /// makes a simulation reproducible.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return match self {
            Distribution::Fixed(d) => d.sample(rng),
            Distribution::Normal(d) => d.sample(rng),
            Distribution::Weibull(d) => d.sample(rng),
            Distribution::Uniform(d) => d.sample(rng),
            Distribution::Triangular(d) => d.sample(rng),
            Distribution::LogNormal(d) => d.sample(rng),
            Distribution::Exponential(d) => d.sample(rng),
            Distribution::Gamma(d) => d.sample(rng),
            Distribution::Beta(d) => d.sample(rng),
            Distribution::Poisson(d) => d.sample(rng),
            Distribution::Discrete(d) => d.sample(rng),
        };
    }

    /// Draws `n` consecutive samples from the same `rng`.
    pub fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        return (0..n).map(|_| self.sample(rng)).collect::<Vec<f64>>();
    }

    /// Draws a single sample from the thread-local generator, which is seeded
    /// from the OS. The result can not be reproduced: pass an explicit source
    /// to [Distribution::sample] if that matters.
    #[must_use]
    pub fn sample_from_entropy(&self) -> f64 {
        return self.sample(&mut rand::rng());
    }

    /// The `type` tag used for this family in specifications.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        return match self {
            Distribution::Fixed(_) => FixedValue::TAG,
            Distribution::Normal(_) => Normal::TAG,
            Distribution::Weibull(_) => Weibull::TAG,
            Distribution::Uniform(_) => Uniform::TAG,
            Distribution::Triangular(_) => Triangular::TAG,
            Distribution::LogNormal(_) => LogNormal::TAG,
            Distribution::Exponential(_) => Exponential::TAG,
            Distribution::Gamma(_) => Gamma::TAG,
            Distribution::Beta(_) => Beta::TAG,
            Distribution::Poisson(_) => Poisson::TAG,
            Distribution::Discrete(_) => Discrete::TAG,
        };
    }

    /// The specification that rebuilds this distribution through
    /// [from_spec](crate::spec::from_spec).
    #[must_use]
    pub fn to_spec(&self) -> Value {
        let tag: &str = self.tag();
        return match self {
            Distribution::Fixed(d) => json!({ "type": tag, "value": d.get_value() }),
            Distribution::Normal(d) => {
                json!({ "type": tag, "mean": d.get_mean(), "std": d.get_std() })
            }
            Distribution::Weibull(d) => {
                json!({ "type": tag, "shape": d.get_shape(), "scale": d.get_scale() })
            }
            Distribution::Uniform(d) => {
                json!({ "type": tag, "low": d.get_low(), "high": d.get_high() })
            }
            Distribution::Triangular(d) => json!({
                "type": tag,
                "left": d.get_left(),
                "mode": d.get_mode(),
                "right": d.get_right(),
            }),
            Distribution::LogNormal(d) => {
                json!({ "type": tag, "mean": d.get_mean(), "sigma": d.get_sigma() })
            }
            Distribution::Exponential(d) => json!({ "type": tag, "scale": d.get_scale() }),
            Distribution::Gamma(d) => {
                json!({ "type": tag, "shape": d.get_shape(), "scale": d.get_scale() })
            }
            Distribution::Beta(d) => {
                json!({ "type": tag, "alpha": d.get_alpha(), "beta": d.get_beta() })
            }
            Distribution::Poisson(d) => json!({ "type": tag, "lam": d.get_lam() }),
            Distribution::Discrete(d) => {
                json!({ "type": tag, "values": d.get_values(), "probs": d.get_probs() })
            }
        };
    }
}

impl rand_distr::Distribution<f64> for Distribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Distribution::sample(self, rng)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Fixed(d) => fmt::Display::fmt(d, f),
            Distribution::Normal(d) => fmt::Display::fmt(d, f),
            Distribution::Weibull(d) => fmt::Display::fmt(d, f),
            Distribution::Uniform(d) => fmt::Display::fmt(d, f),
            Distribution::Triangular(d) => fmt::Display::fmt(d, f),
            Distribution::LogNormal(d) => fmt::Display::fmt(d, f),
            Distribution::Exponential(d) => fmt::Display::fmt(d, f),
            Distribution::Gamma(d) => fmt::Display::fmt(d, f),
            Distribution::Beta(d) => fmt::Display::fmt(d, f),
            Distribution::Poisson(d) => fmt::Display::fmt(d, f),
            Distribution::Discrete(d) => fmt::Display::fmt(d, f),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Distribution {
                fn from(value: $ty) -> Self {
                    Distribution::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Fixed(FixedValue),
    Normal(Normal),
    Weibull(Weibull),
    Uniform(Uniform),
    Triangular(Triangular),
    LogNormal(LogNormal),
    Exponential(Exponential),
    Gamma(Gamma),
    Beta(Beta),
    Poisson(Poisson),
    Discrete(Discrete),
);

/// Returns `value` if it is a finite number.
pub(crate) fn require_finite(
    distribution: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, DistributionError> {
    if value.is_nan() {
        return Err(DistributionError::invalid(distribution, parameter, "found NaN"));
    }
    if !value.is_finite() {
        return Err(DistributionError::invalid(
            distribution,
            parameter,
            format!("{value} is not finite"),
        ));
    }
    return Ok(value);
}

/// Returns `value` if it is finite and `0.0 < value`.
pub(crate) fn require_positive(
    distribution: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, DistributionError> {
    let value: f64 = require_finite(distribution, parameter, value)?;
    if value <= 0.0 {
        return Err(DistributionError::invalid(
            distribution,
            parameter,
            format!("{value} must be strictly positive"),
        ));
    }
    return Ok(value);
}

/// Returns `value` if it is finite and `0.0 <= value`.
pub(crate) fn require_non_negative(
    distribution: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, DistributionError> {
    let value: f64 = require_finite(distribution, parameter, value)?;
    if value < 0.0 {
        return Err(DistributionError::invalid(
            distribution,
            parameter,
            format!("{value} must not be negative"),
        ));
    }
    return Ok(value);
}
