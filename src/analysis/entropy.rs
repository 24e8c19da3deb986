//! Entropy estimation for the random body.
//!
//! The estimate assumes independent uniform draws. With no-repeat the
//! real search space is smaller (a falling factorial rather than a
//! power), so the figure is an upper approximation, not a bound.

/// Estimated entropy in bits: `length * log2(alphabet_size)`.
///
/// Returns `0.0` when there is nothing to choose from.
pub fn estimate_entropy(alphabet_size: usize, length: usize) -> f64 {
    if alphabet_size <= 1 || length == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

/// Entropy estimate for one password of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimate {
    /// Estimated bits.
    pub bits: f64,
    /// Alphabet size used for the estimate.
    pub alphabet_size: usize,
    /// Body length used for the estimate.
    pub length: usize,
}

impl EntropyEstimate {
    /// Computes the estimate for an alphabet size and body length.
    pub fn new(alphabet_size: usize, length: usize) -> Self {
        Self {
            bits: estimate_entropy(alphabet_size, length),
            alphabet_size,
            length,
        }
    }
}

impl std::fmt::Display for EntropyEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "~{:.1} bits of entropy per password (random portion only).",
            self.bits
        )
    }
}
