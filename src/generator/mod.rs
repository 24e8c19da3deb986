//! Password generation.
//!
//! ```text
//! PasswordConfig → Alphabet::resolve → generate_body (per password) → Password
//! ```

mod batch;
mod body;
mod password;

pub use batch::{generate, Generator};
pub use body::{generate_body, BodyRules};
pub use password::Password;
