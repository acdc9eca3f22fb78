//! Password length parameter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("password length {0} outside {min}..={max}", min = PasswordLength::MIN, max = PasswordLength::MAX)]
pub struct LengthError(
    /// The rejected length.
    pub usize,
);

/// Number of characters in a password, always within `8..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PasswordLength(usize);

impl PasswordLength {
    /// Shortest supported length.
    pub const MIN: usize = 8;
    /// Longest supported length.
    pub const MAX: usize = 32;

    /// Validates `length`.
    pub fn new(length: usize) -> Result<Self, LengthError> {
        if (Self::MIN..=Self::MAX).contains(&length) {
            Ok(Self(length))
        } else {
            Err(LengthError(length))
        }
    }

    /// Saturates `length` into range, as a slider would.
    pub fn clamped(length: usize) -> Self {
        Self(length.clamp(Self::MIN, Self::MAX))
    }

    /// The length as a character count.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<usize> for PasswordLength {
    type Error = LengthError;

    fn try_from(length: usize) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

impl From<PasswordLength> for usize {
    fn from(length: PasswordLength) -> Self {
        length.0
    }
}

impl std::fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for PasswordLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length: usize = s.parse().map_err(|e| format!("{e}"))?;
        Self::new(length).map_err(|e| e.to_string())
    }
}
