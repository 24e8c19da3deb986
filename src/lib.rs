//! Secure Password Generator Library
//!
//! Generates random passwords from configurable character classes using
//! a cryptographically secure random source, with optional exclusions,
//! per-class requirements, and no-repeat constraints.
//!
//! # Architecture
//!
//! ```text
//! config → alphabet → generator → output
//!                         ↑
//!                      random (injected CSPRNG)
//! ```
//!
//! # Design Principles
//!
//! - **Injected randomness**: every draw goes through a caller-supplied
//!   `RngCore + CryptoRng`; production code uses [`SecureRng`]
//! - **Unbiased draws**: indices come from rejection sampling, never a bare modulo
//! - **Bounded work**: per-class requirements use reserve-and-shuffle, no retries
//! - **All-or-nothing**: a password is either fully generated or an error is returned
//!
//! # Example
//!
//! ```no_run
//! use spg::{CharClass, Generator, PasswordConfig, SecureRng};
//!
//! let config = PasswordConfig {
//!     require_classes: true,
//!     count: 3,
//!     ..PasswordConfig::with_classes(20, &[CharClass::Lower, CharClass::Upper, CharClass::Digits])
//! };
//!
//! let generator = Generator::new(&config).unwrap();
//! let mut rng = SecureRng::from_os_entropy().unwrap();
//!
//! for password in generator.generate_batch(&mut rng).unwrap() {
//!     println!("{password}");
//! }
//! println!("{:.1} bits each", generator.entropy_bits());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod random;

// Re-export commonly used types at crate root
pub use alphabet::{Alphabet, CharClass, ClassPool};
pub use analysis::{estimate_entropy, EntropyEstimate};
pub use config::{ClassSelection, ConfigError, FileConfig, OutputConfig, PasswordConfig};
pub use error::{Error, GenerationError};
pub use generator::{generate, Generator, Password};
pub use output::{copy_to_clipboard, render, ClipboardError, ClipboardTool, OutputFormat};
pub use random::SecureRng;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
