//! Entropy estimation.
//!
//! The estimate describes the random body only. Prefix and suffix are
//! fixed text an attacker is assumed to know.

mod entropy;

pub use entropy::{estimate_entropy, EntropyEstimate};
