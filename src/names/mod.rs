//! Plausible Windows artifact name generators, one module per family.

pub mod file;
pub mod service;
pub mod share;
pub mod task;

use rand::{Rng, RngCore};

/// Uniform draw from a vocabulary.
pub(crate) fn pick(rng: &mut dyn RngCore, vocab: &[&str]) -> String {
    vocab[rng.gen_range(0..vocab.len())].to_string()
}
