//! Command-line arguments.
//!
//! Flags override values loaded from `--config`. Class flags replace the
//! file's class selection; boolean switches can only turn options on.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use spg::{
    ClassSelection, ConfigError, FileConfig, OutputConfig, OutputFormat, PasswordConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "spg",
    version,
    about = "Secure Password Generator (cryptographically secure, highly customizable).",
    after_help = "Examples:
  spg                          16-char strong default
  spg -l 24 -n 5 --require-classes --no-ambiguous
  spg -l 18 --upper --digits --exclude QO0 --no-ambiguous
  spg -l 32 --url-safe
  spg -n 3 --format json
  spg --copy --show-entropy"
)]
pub struct Cli {
    /// Length of the RANDOM portion (excludes prefix/suffix) [default: 16]
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate [default: 1]
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Include lowercase letters
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include symbols
    #[arg(long)]
    pub symbols: bool,

    /// Override the symbol set (e.g. "!@#$%^&*"); default is ASCII punctuation
    #[arg(long, value_name = "CHARS")]
    pub symbols_set: Option<String>,

    /// Characters to exclude from the pool
    #[arg(long, value_name = "CHARS")]
    pub exclude: Option<String>,

    /// Remove ambiguous look-alikes like O/0/I/l/1
    #[arg(long)]
    pub no_ambiguous: bool,

    /// Disallow repeated characters in the RANDOM portion
    #[arg(long)]
    pub no_repeat: bool,

    /// Require at least one character from each selected class
    #[arg(long)]
    pub require_classes: bool,

    /// Use URL-safe unreserved characters only (A-Z a-z 0-9 - . _ ~)
    #[arg(
        long,
        conflicts_with_all = ["lower", "upper", "digits", "symbols", "symbols_set"]
    )]
    pub url_safe: bool,

    /// Prefix to prepend (not counted in --length)
    #[arg(long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Suffix to append (not counted in --length)
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,

    /// Output format [default: plain]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator for plain output when --count > 1 [default: newline]
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Print estimated entropy (bits) to stderr
    #[arg(long)]
    pub show_entropy: bool,

    /// Copy the first generated password to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Load defaults from a TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the generator and output settings from the config file
    /// (if any) and the command-line flags.
    pub fn resolve(&self) -> Result<(PasswordConfig, OutputConfig), ConfigError> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(self.apply(file))
    }

    fn class_selection(&self) -> ClassSelection {
        ClassSelection {
            lower: self.lower,
            upper: self.upper,
            digits: self.digits,
            symbols: self.symbols,
        }
    }

    fn apply(&self, file: FileConfig) -> (PasswordConfig, OutputConfig) {
        let FileConfig {
            generator: mut generator,
            output: mut out,
        } = file;

        if let Some(length) = self.length {
            generator.length = length;
        }
        if let Some(count) = self.count {
            generator.count = count;
        }

        let selection = self.class_selection();
        if !selection.is_empty() {
            generator.classes = selection;
            generator.url_safe = false;
        }
        if self.symbols_set.is_some() {
            generator.symbols.clone_from(&self.symbols_set);
            generator.url_safe = false;
        }
        if let Some(exclude) = &self.exclude {
            generator.exclude.clone_from(exclude);
        }

        generator.no_ambiguous |= self.no_ambiguous;
        generator.no_repeat |= self.no_repeat;
        generator.require_classes |= self.require_classes;
        generator.url_safe |= self.url_safe;

        if let Some(prefix) = &self.prefix {
            generator.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            generator.suffix.clone_from(suffix);
        }

        if let Some(format) = self.format {
            out.format = format;
        }
        if let Some(separator) = &self.separator {
            out.separator.clone_from(separator);
        }
        out.show_entropy |= self.show_entropy;
        out.copy |= self.copy;

        (generator, out)
    }
}
