#![allow(clippy::needless_return)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

//! # osrisk
//!
//!
//! Probability distributions used as uncertain inputs of Monte Carlo
//! simulations. This library provides:
//!
//! - [x] A closed set of common distributions ready to be sampled
//! - [x] A factory that builds them from declarative specifications
//!     (numbers or tagged mappings, usually read from a configuration file)
//! - [x] Reproducible random sources
//!
//! It does **not** evaluate pdfs or cdfs, fit distributions to data or run the
//! simulation itself: the caller owns the Monte Carlo loop and just asks every
//! input for a new sample on each trial.
//!
//! ## Distributions
//!
//! The [Distribution] enum wraps one of the supported families. Every family
//! can also be built directly with its `new` function:
//!
//! ### Continuous distributions:
//!
//!  - [x] [Normal distribution](distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Log-normal distribution](distributions::LogNormal) ([Wiki](https://en.wikipedia.org/wiki/Log-normal_distribution))
//!  - [x] [Uniform distribution](distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Triangular distribution](distributions::Triangular) ([Wiki](https://en.wikipedia.org/wiki/Triangular_distribution))
//!  - [x] [Exponential](distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Weibull distribution](distributions::Weibull) ([Wiki](https://en.wikipedia.org/wiki/Weibull_distribution))
//!  - [x] [Gamma distribution](distributions::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] [Beta distribution](distributions::Beta) ([Wiki](https://en.wikipedia.org/wiki/Beta_distribution))
//!
//! ### Discrete distributions:
//!
//!  - [x] [Fixed value](distributions::FixedValue) ([Wiki](https://en.wikipedia.org/wiki/Degenerate_distribution))
//!  - [x] [Poisson distribution](distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [x] [Discrete distribution](distributions::Discrete) ([Wiki](https://en.wikipedia.org/wiki/Categorical_distribution))
//!
//! ## Specifications
//!
//! [from_spec] builds a distribution from a [serde_json::Value]: a number
//! becomes a [FixedValue](distributions::FixedValue), a mapping is dispatched
//! on its `type` key. See [spec] for the full schema. Malformed specifications
//! are rejected right away with a [DistributionError]; sampling never fails.
//!
//! ## Randomness
//!
//! Sampling takes the random source explicitly:
//!
//! ```
//! use osrisk::{from_spec, random_source::seeded};
//! use serde_json::json;
//!
//! let duration = from_spec(&json!({ "type": "weibull", "shape": 1.5, "scale": 10.0 })).unwrap();
//! let mut rng = seeded(42);
//! let x: f64 = duration.sample(&mut rng);
//! assert!(0.0 <= x);
//! ```
//!
//! Distributions are immutable and can be shared between threads. A random
//! source can not: give every thread its own one (see [random_source]).
//!
//! ***
//!

pub mod configuration;
pub mod distributions;
pub mod errors;
pub mod random_source;
pub mod spec;

pub use distributions::Distribution;
pub use errors::{DistributionError, ErrorKind};
pub use spec::{from_json_str, from_spec, from_specs};
