//! ChaCha-based CSPRNG seeded from the operating system.
//!
//! One `SecureRng` is created per run and passed by `&mut` into every
//! generation function. Nothing in the crate holds a global generator.

use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};
use zeroize::Zeroize;

/// A CSPRNG backed by ChaCha20 with an OS-provided seed.
///
/// This is the generator used on every production path. Tests may pass
/// any other `RngCore + CryptoRng` (for example a seeded `ChaCha20Rng`)
/// to the generation functions instead.
pub struct SecureRng {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// Bytes handed out since creation.
    bytes_generated: u64,
}

impl SecureRng {
    /// Creates a new CSPRNG seeded from the OS entropy source.
    ///
    /// Fails only if the OS source is unavailable.
    pub fn from_os_entropy() -> Result<Self, rand_core::Error> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;
        let inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        tracing::debug!("CSPRNG seeded from OS entropy");

        Ok(Self {
            inner,
            bytes_generated: 0,
        })
    }

    /// Creates a CSPRNG from a known seed (for testing only).
    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            bytes_generated: 0,
        }
    }

    /// Returns bytes generated so far.
    pub fn bytes_generated(&self) -> u64 {
        self.bytes_generated
    }
}

impl std::fmt::Debug for SecureRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRng")
            .field("bytes_generated", &self.bytes_generated)
            .finish_non_exhaustive()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.bytes_generated += 4;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.bytes_generated += 8;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes_generated += dest.len() as u64;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.bytes_generated += dest.len() as u64;
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_generated_tracking() {
        let mut rng = SecureRng::from_os_entropy().unwrap();

        let mut buf = [0u8; 100];
        rng.fill_bytes(&mut buf);
        rng.next_u64();

        assert_eq!(rng.bytes_generated(), 108);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut rng1 = SecureRng::from_seed_for_testing([0x01; 32]);
        let mut rng2 = SecureRng::from_seed_for_testing([0x01; 32]);

        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_os_seeded_instances_differ() {
        let mut rng1 = SecureRng::from_os_entropy().unwrap();
        let mut rng2 = SecureRng::from_os_entropy().unwrap();

        let mut out1 = [0u8; 32];
        let mut out2 = [0u8; 32];
        rng1.fill_bytes(&mut out1);
        rng2.fill_bytes(&mut out2);

        assert_ne!(out1, out2);
    }

    #[test]
    fn test_debug_hides_state() {
        let rng = SecureRng::from_seed_for_testing([0x42; 32]);
        let debug = format!("{rng:?}");
        assert!(debug.contains("bytes_generated"));
        assert!(!debug.contains("inner"));
    }
}
