//! Prometheus metrics for generation outcomes.
//!
//! # Metrics Exposed
//!
//! - `entropy_password_generations_total` - Generation attempts
//! - `entropy_password_successes_total` - Passwords produced
//! - `entropy_password_validation_errors_total` - Rejected before or after the fetch
//! - `entropy_password_timeouts_total` - Requests that exceeded the wait budget
//! - `entropy_password_application_errors_total` - Service reported failure
//! - `entropy_password_transport_errors_total` - Network or protocol failures
//! - `entropy_password_last_latency_seconds` - Duration of the latest attempt
//!
//! # Example
//!
//! ```no_run
//! use entropy_password::metrics::MetricsRegistry;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! eprintln!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
