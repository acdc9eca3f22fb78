//! The remote random-byte service.
//!
//! This crate never produces randomness of its own. Random bytes come
//! from an HTTP endpoint that answers `GET /api/v1/generate` with a JSON
//! envelope; this module defines that envelope, the [`RandomSource`]
//! seam the orchestrator calls through, and the reqwest-backed
//! implementation used in production.

mod client;
mod config;
mod envelope;

pub use client::{HttpRandomSource, RandomSource, SourceError};
pub use config::ServiceConfig;
pub use envelope::{ServiceResponse, SUCCESS_CODE};
