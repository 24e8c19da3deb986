//! Generated password type.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A generated password: `prefix + body + suffix`.
///
/// Only the body is random. The text is wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    /// Full text including prefix and suffix.
    text: String,
    /// Byte offset where the body starts.
    body_start: usize,
    /// Byte offset where the body ends.
    body_end: usize,
}

impl Password {
    /// Builds a password around a random body.
    pub(crate) fn assemble(prefix: &str, body: &[char], suffix: &str) -> Self {
        let body_bytes: usize = body.iter().map(|c| c.len_utf8()).sum();
        let mut text = String::with_capacity(prefix.len() + body_bytes + suffix.len());
        text.push_str(prefix);
        text.extend(body.iter());
        text.push_str(suffix);

        Self {
            text,
            body_start: prefix.len(),
            body_end: prefix.len() + body_bytes,
        }
    }

    /// Returns the full password text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns only the random body.
    #[inline]
    pub fn body(&self) -> &str {
        &self.text[self.body_start..self.body_end]
    }

    /// Returns the prefix.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.text[..self.body_start]
    }

    /// Returns the suffix.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.text[self.body_end..]
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("body_chars", &self.body().chars().count())
            .field("text", &"<redacted>")
            .finish()
    }
}
