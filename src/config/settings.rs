//! Generation and output settings.
//!
//! `PasswordConfig` is the fully-resolved configuration handed to the
//! generator. `OutputConfig` carries the presentation options the
//! front end needs and the generator never looks at.

use serde::{Deserialize, Serialize};

use crate::alphabet::CharClass;
use crate::error::GenerationError;
use crate::output::OutputFormat;

/// Default length of the random portion.
pub const DEFAULT_LENGTH: usize = 16;

/// Which character classes were explicitly requested.
///
/// When nothing is requested every class is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSelection {
    /// Include `a-z`.
    pub lower: bool,
    /// Include `A-Z`.
    pub upper: bool,
    /// Include `0-9`.
    pub digits: bool,
    /// Include symbols.
    pub symbols: bool,
}

impl ClassSelection {
    /// Selection containing exactly the given classes.
    pub fn of(classes: &[CharClass]) -> Self {
        let mut selection = Self::default();
        for class in classes {
            selection.set(*class, true);
        }
        selection
    }

    /// Enables or disables a single class.
    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Lower => self.lower = enabled,
            CharClass::Upper => self.upper = enabled,
            CharClass::Digits => self.digits = enabled,
            CharClass::Symbols => self.symbols = enabled,
        }
    }

    /// Returns true if `class` was explicitly requested.
    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Returns true if no class was explicitly requested.
    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.symbols)
    }

    /// Classes in effect, in canonical order. Falls back to all classes.
    pub fn effective(&self) -> Vec<CharClass> {
        if self.is_empty() {
            return CharClass::ALL.to_vec();
        }
        CharClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
            .collect()
    }
}

/// Configuration for password generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Length of the random body (prefix and suffix not counted).
    pub length: usize,
    /// Number of passwords to generate.
    pub count: usize,
    /// Requested character classes.
    pub classes: ClassSelection,
    /// Replacement contents for the symbol class.
    pub symbols: Option<String>,
    /// Characters removed from every class.
    pub exclude: String,
    /// Remove visually confusable characters.
    pub no_ambiguous: bool,
    /// Never use a character twice within one body.
    pub no_repeat: bool,
    /// Guarantee at least one character from each selected class.
    pub require_classes: bool,
    /// Use the URL-safe charset instead of the classes.
    pub url_safe: bool,
    /// Fixed text prepended to every password.
    pub prefix: String,
    /// Fixed text appended to every password.
    pub suffix: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: 1,
            classes: ClassSelection::default(),
            symbols: None,
            exclude: String::new(),
            no_ambiguous: false,
            no_repeat: false,
            require_classes: false,
            url_safe: false,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl PasswordConfig {
    /// Creates a configuration with the given body length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Creates a configuration using only the given classes.
    pub fn with_classes(length: usize, classes: &[CharClass]) -> Self {
        Self {
            length,
            classes: ClassSelection::of(classes),
            ..Default::default()
        }
    }

    /// Validates the scalar parameters.
    ///
    /// Constraints that depend on the resolved alphabet are checked
    /// during resolution and generation.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.length == 0 {
            return Err(GenerationError::invalid("length must be >= 1"));
        }
        if self.count == 0 {
            return Err(GenerationError::invalid("count must be >= 1"));
        }
        Ok(())
    }
}

/// Output presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output encoding.
    pub format: OutputFormat,
    /// Separator between passwords in plain mode.
    pub separator: String,
    /// Print the entropy estimate to stderr.
    pub show_entropy: bool,
    /// Copy the first password to the clipboard.
    pub copy: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            separator: "\n".to_string(),
            show_entropy: false,
            copy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = PasswordConfig::default();
        assert_eq!(config.length, 16);
        assert_eq!(config.count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_length_invalid() {
        let config = PasswordConfig::with_length(0);
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_count_invalid() {
        let config = PasswordConfig {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_selection_falls_back_to_all() {
        let selection = ClassSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.effective(), CharClass::ALL.to_vec());
    }

    #[test]
    fn test_selection_keeps_canonical_order() {
        let selection = ClassSelection::of(&[CharClass::Symbols, CharClass::Lower]);
        assert_eq!(
            selection.effective(),
            vec![CharClass::Lower, CharClass::Symbols]
        );
    }
}
