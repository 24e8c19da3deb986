//! Statistical distribution checks.
//!
//! Chi-square goodness-of-fit against a uniform expectation. Seeds are
//! fixed so results are reproducible; thresholds are the p = 0.001
//! critical values.

use std::collections::HashMap;

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use spg::{CharClass, Generator, PasswordConfig};

/// Chi-square critical values at p = 0.001, indexed by degrees of freedom.
fn critical_value(df: usize) -> f64 {
    match df {
        3 => 16.27,
        9 => 27.88,
        25 => 52.62,
        _ => panic!("no critical value for df={df}"),
    }
}

fn chi_square(counts: &[u64], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn char_counts(generator: &Generator, seed: u64, batches: usize) -> HashMap<char, u64> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..batches {
        for password in generator.generate_batch(&mut rng).unwrap() {
            for c in password.body().chars() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
    }
    counts
}

#[test]
fn digits_are_uniform() {
    let config = PasswordConfig {
        count: 100,
        ..PasswordConfig::with_classes(20, &[CharClass::Digits])
    };
    let generator = Generator::new(&config).unwrap();
    let counts = char_counts(&generator, 0xd16175, 10);

    assert_eq!(counts.len(), 10);
    let observed: Vec<u64> = counts.values().copied().collect();
    let total: u64 = observed.iter().sum();
    assert_eq!(total, 20_000);

    let stat = chi_square(&observed, total as f64 / 10.0);
    assert!(stat < critical_value(9), "chi-square {stat:.2}");
}

#[test]
fn no_repeat_draws_are_uniform() {
    // Length 5 of 26 letters without repeats: every letter is still
    // equally likely to appear.
    let config = PasswordConfig {
        count: 200,
        no_repeat: true,
        ..PasswordConfig::with_classes(5, &[CharClass::Lower])
    };
    let generator = Generator::new(&config).unwrap();
    let counts = char_counts(&generator, 0x0e9ea7, 26);

    assert_eq!(counts.len(), 26);
    let observed: Vec<u64> = counts.values().copied().collect();
    let total: u64 = observed.iter().sum();

    let stat = chi_square(&observed, total as f64 / 26.0);
    assert!(stat < critical_value(25), "chi-square {stat:.2}");
}

#[test]
fn reserved_class_positions_are_uniform() {
    // With one character per class, the digit must be equally likely in
    // every position.
    let config = PasswordConfig {
        count: 1000,
        require_classes: true,
        ..PasswordConfig::with_length(4)
    };
    let generator = Generator::new(&config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5107);

    let mut positions = [0u64; 4];
    for _ in 0..4 {
        for password in generator.generate_batch(&mut rng).unwrap() {
            let pos = password
                .body()
                .chars()
                .position(|c| c.is_ascii_digit())
                .unwrap();
            positions[pos] += 1;
        }
    }

    let stat = chi_square(&positions, 1000.0);
    assert!(stat < critical_value(3), "chi-square {stat:.2}: {positions:?}");
}

#[test]
fn repeated_batches_are_not_replayed() {
    let config = PasswordConfig {
        count: 500,
        ..PasswordConfig::with_classes(6, &[CharClass::Digits])
    };
    let generator = Generator::new(&config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(9);

    let first: Vec<String> = generator
        .generate_batch(&mut rng)
        .unwrap()
        .iter()
        .map(|p| p.to_string())
        .collect();
    let second: Vec<String> = generator
        .generate_batch(&mut rng)
        .unwrap()
        .iter()
        .map(|p| p.to_string())
        .collect();

    let shared = first.iter().zip(&second).filter(|(a, b)| a == b).count();
    // 10^6 possible bodies; a handful of collisions at most.
    assert!(shared < 5, "{shared} positional repeats");
}
