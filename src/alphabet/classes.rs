//! Character classes and fixed character sets.

use serde::{Deserialize, Serialize};

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII decimal digits.
pub const DIGITS: &str = "0123456789";
/// Default symbol class: all ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// URL-safe unreserved characters (RFC 3986).
pub const URL_SAFE: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Visually confusable glyphs removed by the no-ambiguous option.
pub const AMBIGUOUS: &str = "O0oIl1|`'\"{}[]()/\\;:,.<>";

/// Whitespace is never allowed in an alphabet.
pub const WHITESPACE: &str = " \t\r\n";

/// A selectable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// `a-z`
    Lower,
    /// `A-Z`
    Upper,
    /// `0-9`
    Digits,
    /// Punctuation, or the custom symbol set when one is configured.
    Symbols,
}

impl CharClass {
    /// All classes in canonical order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// Returns the class contents, using `custom_symbols` for the symbol class.
    pub fn chars<'a>(&self, custom_symbols: Option<&'a str>) -> &'a str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => custom_symbols.unwrap_or(SYMBOLS),
        }
    }

    /// Short name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
