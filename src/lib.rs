//! Entropy Password Library
//!
//! Generates passwords from random bytes supplied by a remote
//! random-byte service. The crate performs no randomness generation of
//! its own: it requests a batch of `uint8` values, waits a bounded
//! time for them, and maps each value onto the selected alphabet.
//!
//! # Architecture
//!
//! ```text
//! charset → generator → service (HTTP)
//!               ↓
//!           formatter → session (display state)
//! ```
//!
//! # Design Principles
//!
//! - **One call per attempt**: no retries, no backoff
//! - **Bounded wait**: the request is cancelled when the budget expires
//! - **Deterministic mapping**: identical bytes always give the same password
//! - **Fail fast**: an empty selection never reaches the network
//!
//! # Example
//!
//! ```no_run
//! use entropy_password::{
//!     charset::{Alphabet, ClassSelection},
//!     generator::{Generator, PasswordLength},
//!     service::ServiceConfig,
//! };
//!
//! # async fn run() {
//! let generator = Generator::from_config(&ServiceConfig::default()).unwrap();
//! let alphabet = Alphabet::from_selection(&ClassSelection::default());
//!
//! match generator.generate(PasswordLength::default(), &alphabet).await {
//!     Ok(password) => println!("{}", password),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod config;
pub mod formatter;
pub mod generator;
pub mod metrics;
pub mod service;
pub mod session;

// Re-export commonly used types at crate root
pub use charset::{Alphabet, CharacterClass, ClassSelection};
pub use config::{ConfigError, FileConfig};
pub use formatter::{format_password, GeneratedPassword, ValidationError};
pub use generator::{GenerateError, Generator, Outcome, PasswordLength};
pub use service::{HttpRandomSource, RandomSource, ServiceConfig};
pub use session::{GenerationState, Session};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
