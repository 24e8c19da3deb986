//! Secure randomness.
//!
//! Randomness is an injected capability: generation functions take
//! `&mut R where R: RngCore + CryptoRng` rather than reaching for a
//! global source. `SecureRng` is the production implementation.

mod csprng;
mod sampling;

pub use csprng::SecureRng;
pub use sampling::{choose, shuffle, uniform_index};
