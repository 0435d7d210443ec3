//! # Random sources
//!
//! Every `sample` method in this library takes its randomness as an explicit
//! `&mut R` where `R: rand::Rng`. Any generator works, but simulations that
//! need to be reproduced should use a [RandomSource] built here.
//!
//! A single source must not be used by two tasks at the same time. To sample
//! concurrently, give each task its own source: same `seed`, different
//! `stream`.
//!
//! ```
//! use osrisk::random_source::{random_source, RandomSource};
//!
//! let mut a: RandomSource = random_source().seed(42).call();
//! let mut b: RandomSource = random_source().seed(42).stream(1).call();
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator used for reproducible simulations.
pub type RandomSource = ChaCha8Rng;

/// Builds a [RandomSource].
///
///  - `seed`: if present the source is fully determined by `seed` and `stream`.
///     If absent, it is seeded from the thread-local (OS seeded) generator.
///  - `stream`: selects one of the `2^64` independent sequences of the seed.
///     Defaults to `0`.
#[bon::builder]
pub fn random_source(seed: Option<u64>, #[builder(default)] stream: u64) -> RandomSource {
    let mut rng: RandomSource = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    rng.set_stream(stream);
    return rng;
}

/// Shorthand for `random_source().seed(seed).call()`.
#[must_use]
pub fn seeded(seed: u64) -> RandomSource {
    return random_source().seed(seed).call();
}

/// A fresh source seeded from OS entropy. Not reproducible.
#[must_use]
pub fn from_entropy() -> RandomSource {
    return random_source().call();
}
