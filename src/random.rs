//! Random alphabetic string fixture
//!
//! Strings are drawn uniformly from the 52 ASCII letters `a-z` and `A-Z`.

use rand::prelude::*;

use crate::config::SuiteConfig;

/// Symbols a generated string is drawn from
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random string of `length` ASCII letters using the thread-local RNG
#[must_use]
pub fn random_alphabets(length: usize) -> String {
    random_alphabets_with(&mut thread_rng(), length)
}

/// Reproducible random string for a given seed
#[must_use]
pub fn random_alphabets_seeded(length: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    random_alphabets_with(&mut rng, length)
}

/// Random string as configured by `config`
///
/// Uses `config.random_length` characters, seeded from `config.seed` when
/// one is set.
#[must_use]
pub fn random_alphabets_for(config: &SuiteConfig) -> String {
    match config.seed {
        Some(seed) => random_alphabets_seeded(config.random_length, seed),
        None => random_alphabets(config.random_length),
    }
}

/// Random string of `length` ASCII letters drawn from `rng`
pub fn random_alphabets_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}
