//! Error types shared across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while resolving an alphabet or generating passwords.
///
/// All of these are detected before or during generation of a single
/// password; nothing is retried and no partial password is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No characters remain after class selection and filtering.
    #[error("character pool is empty after filters; relax exclusions or enable more classes")]
    EmptyAlphabet,

    /// The configuration cannot be satisfied.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Password generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The operating system random source is unavailable.
    #[error("secure random source unavailable: {0}")]
    Random(#[from] rand_core::Error),

    /// JSON encoding of the output failed.
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
