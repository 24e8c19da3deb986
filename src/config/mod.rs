//! Generator configuration.
//!
//! Settings are plain serde structs so the same types serve the
//! command line, the TOML config file, and library callers.

mod file;
mod settings;

pub use file::{ConfigError, FileConfig};
pub use settings::{ClassSelection, OutputConfig, PasswordConfig, DEFAULT_LENGTH};
