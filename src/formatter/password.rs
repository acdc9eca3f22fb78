//! Password formatting.

use crate::charset::Alphabet;
use thiserror::Error;

/// Input rejected before or during formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The alphabet is empty.
    #[error("select at least one character type")]
    NoClassSelected,
    /// Fewer random values than password characters.
    #[error("insufficient random data: got {got} values, need {need}")]
    InsufficientData {
        /// Values supplied.
        got: usize,
        /// Values required.
        need: usize,
    },
}

/// A password drawn from an alphabet.
///
/// The `Debug` output omits the password itself so it does not leak
/// into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    value: String,
    length: usize,
}

impl GeneratedPassword {
    /// The password text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the password has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Consumes the password and returns its text.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Formats `length` characters from `bytes` using `alphabet`.
///
/// Only the first `length` bytes are read. Fails if the alphabet is
/// empty or fewer than `length` bytes are supplied.
pub fn format_password(
    bytes: &[u8],
    alphabet: &Alphabet,
    length: usize,
) -> Result<GeneratedPassword, ValidationError> {
    if alphabet.is_empty() {
        return Err(ValidationError::NoClassSelected);
    }
    if bytes.len() < length {
        return Err(ValidationError::InsufficientData {
            got: bytes.len(),
            need: length,
        });
    }

    let chars = alphabet.as_slice();
    let value: String = bytes[..length]
        .iter()
        .map(|&b| chars[usize::from(b) % chars.len()])
        .collect();

    Ok(GeneratedPassword { value, length })
}
