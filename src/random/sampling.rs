//! Unbiased sampling on top of a secure random source.

use rand_core::{CryptoRng, RngCore};

/// Draws an index uniformly from `0..bound`.
///
/// Uses rejection sampling over 64-bit words: values from the final,
/// incomplete block of size `2^64 mod bound` are discarded, so every
/// index is equally likely. Expected draws per call are below 2.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> usize
where
    R: RngCore + CryptoRng + ?Sized,
{
    assert!(bound > 0, "uniform_index called with empty range");

    let bound = bound as u64;
    // 2^64 mod bound
    let rejected = (u64::MAX % bound + 1) % bound;

    loop {
        let value = rng.next_u64();
        if rejected == 0 || value <= u64::MAX - rejected {
            return (value % bound) as usize;
        }
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    Some(&items[uniform_index(rng, items.len())])
}

/// Fisher–Yates shuffle.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: RngCore + CryptoRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    /// Replays a fixed sequence of words.
    struct SequenceRng {
        values: Vec<u64>,
        position: usize,
    }

    impl SequenceRng {
        fn new(values: Vec<u64>) -> Self {
            Self {
                values,
                position: 0,
            }
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for SequenceRng {}

    #[test]
    fn test_rejects_biased_tail() {
        // 2^64 mod 3 == 1, so only u64::MAX falls in the rejected tail.
        let mut rng = SequenceRng::new(vec![u64::MAX, 5]);
        assert_eq!(uniform_index(&mut rng, 3), 2);
        assert_eq!(rng.position, 2);
    }

    #[test]
    fn test_power_of_two_never_rejects() {
        let mut rng = SequenceRng::new(vec![u64::MAX]);
        assert_eq!(uniform_index(&mut rng, 8), 7);
        assert_eq!(rng.position, 1);
    }

    #[test]
    fn test_bound_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(uniform_index(&mut rng, 1), 0);
        }
    }

    #[test]
    fn test_index_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for bound in 1..200 {
            assert!(uniform_index(&mut rng, bound) < bound);
        }
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let empty: [char; 0] = [];
        assert!(choose(&mut rng, &empty).is_none());
        assert_eq!(choose(&mut rng, &['x']), Some(&'x'));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut rng, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_positions_roughly_uniform() {
        // Track where element 0 of a 4-element slice lands.
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut landed = [0u32; 4];
        for _ in 0..8000 {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut rng, &mut items);
            let pos = items.iter().position(|&x| x == 0).unwrap();
            landed[pos] += 1;
        }
        for count in landed {
            assert!((1700..2300).contains(&count), "skewed: {landed:?}");
        }
    }
}
