//! Password generation requests.
//!
//! The [`Generator`] issues exactly one request to a [`RandomSource`]
//! per call, races it against a fixed wait budget, and folds every
//! failure into a [`GenerateError`] whose `Display` is the message shown
//! to the user. Nothing is retried.
//!
//! [`RandomSource`]: crate::service::RandomSource

mod length;
mod orchestrator;

pub use length::{LengthError, PasswordLength};
pub use orchestrator::{GenerateError, Generator, Outcome};
