//! Random body generation.
//!
//! Require-classes uses reserve-and-shuffle: one character is drawn from
//! each required class, the rest from the full alphabet, and the whole
//! body is then shuffled so the reserved slots land anywhere. Work is
//! bounded; nothing is retried.
//!
//! With no-repeat, classes may share characters (a custom symbol set can
//! overlap the letters), so each reservation is drawn only among the
//! characters that still leave every later class a distinct character of
//! its own.

use std::collections::{BTreeMap, BTreeSet};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, ClassPool};
use crate::error::GenerationError;
use crate::random::{choose, shuffle, uniform_index};

/// Per-body constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyRules {
    /// Never place the same character twice.
    pub no_repeat: bool,
    /// Place at least one character of each class pool.
    pub require_classes: bool,
}

/// Generates a random body of `length` characters from `alphabet`.
///
/// Either the full body is produced or an error is returned.
pub fn generate_body<R>(
    rng: &mut R,
    alphabet: &Alphabet,
    length: usize,
    rules: BodyRules,
) -> Result<Zeroizing<Vec<char>>, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let required: &[ClassPool] = if rules.require_classes {
        alphabet.class_pools()
    } else {
        &[]
    };

    check_feasible(alphabet, length, required, rules)?;

    let mut body = Zeroizing::new(Vec::with_capacity(length));
    if rules.no_repeat {
        fill_unique(rng, alphabet, required, length, &mut body)?;
    } else {
        fill_independent(rng, alphabet, required, length, &mut body)?;
    }

    shuffle(rng, body.as_mut_slice());
    Ok(body)
}

fn check_feasible(
    alphabet: &Alphabet,
    length: usize,
    required: &[ClassPool],
    rules: BodyRules,
) -> Result<(), GenerationError> {
    if length == 0 {
        return Err(GenerationError::invalid("length must be >= 1"));
    }
    if length < required.len() {
        return Err(GenerationError::invalid(format!(
            "length ({length}) must be >= number of required classes ({})",
            required.len()
        )));
    }
    if rules.no_repeat && length > alphabet.len() {
        return Err(GenerationError::invalid(format!(
            "no-repeat requested but length ({length}) exceeds pool size ({})",
            alphabet.len()
        )));
    }
    if rules.no_repeat {
        check_reservable(required)?;
    }
    Ok(())
}

/// Fails unless every pool in `required` can be given its own distinct
/// character.
pub(crate) fn check_reservable(required: &[ClassPool]) -> Result<(), GenerationError> {
    if has_distinct_representatives(required, &BTreeSet::new()) {
        return Ok(());
    }
    let names: Vec<&str> = required.iter().map(|pool| pool.class().name()).collect();
    Err(GenerationError::invalid(format!(
        "not enough unique characters to give each of {} its own character under no-repeat",
        names.join(", ")
    )))
}

/// Whether each pool can be matched to a different character outside `taken`.
fn has_distinct_representatives(pools: &[ClassPool], taken: &BTreeSet<char>) -> bool {
    let mut owner: BTreeMap<char, usize> = BTreeMap::new();
    (0..pools.len()).all(|index| {
        let mut visited = BTreeSet::new();
        augment(index, pools, taken, &mut owner, &mut visited)
    })
}

/// Augmenting-path step of bipartite matching between pools and characters.
fn augment(
    index: usize,
    pools: &[ClassPool],
    taken: &BTreeSet<char>,
    owner: &mut BTreeMap<char, usize>,
    visited: &mut BTreeSet<char>,
) -> bool {
    for &c in pools[index].chars() {
        if taken.contains(&c) || !visited.insert(c) {
            continue;
        }
        let free = match owner.get(&c).copied() {
            None => true,
            Some(other) => augment(other, pools, taken, owner, visited),
        };
        if free {
            owner.insert(c, index);
            return true;
        }
    }
    false
}

fn fill_independent<R>(
    rng: &mut R,
    alphabet: &Alphabet,
    required: &[ClassPool],
    length: usize,
    body: &mut Vec<char>,
) -> Result<(), GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    for pool in required {
        let c = choose(rng, pool.chars()).ok_or_else(|| empty_class(pool))?;
        body.push(*c);
    }

    let chars = alphabet.chars();
    while body.len() < length {
        body.push(chars[uniform_index(rng, chars.len())]);
    }
    Ok(())
}

/// No-repeat fill. A placed character leaves every later candidate set,
/// including the pools of classes not yet reserved.
///
/// A reservation is only drawn from characters that keep a complete
/// matching for the classes after it, so a reservable set of pools never
/// fails here.
fn fill_unique<R>(
    rng: &mut R,
    alphabet: &Alphabet,
    required: &[ClassPool],
    length: usize,
    body: &mut Vec<char>,
) -> Result<(), GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut used: BTreeSet<char> = BTreeSet::new();

    for (index, pool) in required.iter().enumerate() {
        let later = &required[index + 1..];
        let mut candidates: Zeroizing<Vec<char>> = Zeroizing::new(Vec::new());
        for &c in pool.chars() {
            if used.insert(c) {
                if has_distinct_representatives(later, &used) {
                    candidates.push(c);
                }
                used.remove(&c);
            }
        }
        let c = *choose(rng, candidates.as_slice()).ok_or_else(|| {
            GenerationError::invalid(format!(
                "not enough unique characters left in class {} to satisfy no-repeat",
                pool.class()
            ))
        })?;
        used.insert(c);
        body.push(c);
    }

    let mut remaining: Zeroizing<Vec<char>> = Zeroizing::new(
        alphabet
            .chars()
            .iter()
            .copied()
            .filter(|c| !used.contains(c))
            .collect(),
    );
    if remaining.len() < length - body.len() {
        return Err(GenerationError::invalid(
            "not enough unique characters to satisfy no-repeat with current pool",
        ));
    }

    while body.len() < length {
        let index = uniform_index(rng, remaining.len());
        body.push(remaining.swap_remove(index));
    }
    Ok(())
}

fn empty_class(pool: &ClassPool) -> GenerationError {
    GenerationError::invalid(format!(
        "require-classes is impossible because class {} is empty after filters",
        pool.class()
    ))
}
