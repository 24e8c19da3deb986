//! Alphabet resolution.
//!
//! Turns a `PasswordConfig` into the deduplicated set of characters the
//! generator draws from, plus the per-class sub-alphabets needed to
//! enforce require-classes.

use std::collections::BTreeSet;

use super::classes::{CharClass, AMBIGUOUS, URL_SAFE, WHITESPACE};
use crate::config::PasswordConfig;
use crate::error::GenerationError;

/// Characters of one selected class that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPool {
    class: CharClass,
    chars: Vec<char>,
}

impl ClassPool {
    /// The class this pool belongs to.
    #[inline]
    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Sorted, deduplicated characters of the class.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// The resolved alphabet.
///
/// Always non-empty. Characters are sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    pools: Vec<ClassPool>,
}

impl Alphabet {
    /// Resolves the alphabet for `config`.
    ///
    /// In URL-safe mode the fixed URL-safe set is used and no class pools
    /// are produced. Otherwise the selected classes (all of them when none
    /// is selected) are merged. Excluded characters, whitespace and, with
    /// `no_ambiguous`, the ambiguous set are then removed.
    pub fn resolve(config: &PasswordConfig) -> Result<Self, GenerationError> {
        let removed = removed_chars(config);
        let keep = |c: &char| !removed.contains(c);

        let (chars, pools) = if config.url_safe {
            let chars: BTreeSet<char> = URL_SAFE.chars().filter(keep).collect();
            (chars, Vec::new())
        } else {
            let symbols = config.symbols.as_deref();
            let pools: Vec<ClassPool> = config
                .classes
                .effective()
                .into_iter()
                .map(|class| ClassPool {
                    class,
                    chars: class
                        .chars(symbols)
                        .chars()
                        .filter(keep)
                        .collect::<BTreeSet<_>>()
                        .into_iter()
                        .collect(),
                })
                .collect();
            let chars: BTreeSet<char> = pools
                .iter()
                .flat_map(|pool| pool.chars.iter().copied())
                .collect();
            (chars, pools)
        };

        if chars.is_empty() {
            return Err(GenerationError::EmptyAlphabet);
        }

        let alphabet = Self {
            chars: chars.into_iter().collect(),
            pools,
        };

        if config.require_classes {
            alphabet.check_required_classes(config.length)?;
        }

        tracing::debug!(
            alphabet_size = alphabet.len(),
            classes = alphabet.pools.len(),
            url_safe = config.url_safe,
            "Resolved alphabet"
        );

        Ok(alphabet)
    }

    /// Verifies that one character of every selected class fits in `length`.
    fn check_required_classes(&self, length: usize) -> Result<(), GenerationError> {
        let missing: Vec<&str> = self
            .pools
            .iter()
            .filter(|pool| pool.chars.is_empty())
            .map(|pool| pool.class.name())
            .collect();
        if !missing.is_empty() {
            return Err(GenerationError::invalid(format!(
                "require-classes is impossible because these classes are empty after filters: {}",
                missing.join(", ")
            )));
        }

        let needed = self.pools.len();
        if length < needed {
            return Err(GenerationError::invalid(format!(
                "length ({length}) must be >= number of required classes ({needed})"
            )));
        }
        Ok(())
    }

    /// Sorted, unique characters available for selection.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a resolved alphabet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if `c` can appear in a password body.
    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Per-class sub-alphabets, in canonical class order.
    ///
    /// Empty in URL-safe mode.
    pub fn class_pools(&self) -> &[ClassPool] {
        &self.pools
    }

    /// Sub-alphabet of a single class, if that class is selected.
    pub fn class_pool(&self, class: CharClass) -> Option<&ClassPool> {
        self.pools.iter().find(|pool| pool.class == class)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

fn removed_chars(config: &PasswordConfig) -> BTreeSet<char> {
    let mut removed: BTreeSet<char> = config.exclude.chars().collect();
    removed.extend(WHITESPACE.chars());
    if config.no_ambiguous {
        removed.extend(AMBIGUOUS.chars());
    }
    removed
}
