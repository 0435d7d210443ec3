
//! This file contains the default values and other value choices used through the library.
//!

/// The probabilities of a [Discrete](crate::distributions::discrete::Discrete)
/// distribution must add up to `1.0`. Since they usually come from decimal
/// literals in a configuration file, the sum is allowed to be off by this much.
///
/// The value is `sqrt(f64::EPSILON)`, around `1.49e-8`.
pub static DISCRETE_PROBABILITY_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Tag shown in [UnknownType](crate::errors::DistributionError::UnknownType)
/// errors when a mapping has no `type` key at all.
pub static MISSING_TYPE_TAG: &str = "<missing>";
