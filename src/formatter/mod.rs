//! Mapping of random bytes onto a password alphabet.
//!
//! Each output position takes one byte and selects
//! `alphabet[byte % alphabet.len()]`. The mapping is not perfectly
//! uniform unless the alphabet length divides 256; this bias is kept
//! so that identical inputs keep producing identical passwords.

mod password;

pub use password::{format_password, GeneratedPassword, ValidationError};
