//! Character classes and alphabet resolution.
//!
//! The alphabet is resolved once per configuration and shared, read-only,
//! by every password in a batch.

mod classes;
mod resolve;

pub use classes::{CharClass, AMBIGUOUS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, URL_SAFE};
pub use resolve::{Alphabet, ClassPool};
