//! Request orchestration: one fetch, one wait budget, one outcome.

use super::PasswordLength;
use crate::charset::Alphabet;
use crate::config::ConfigError;
use crate::formatter::{format_password, GeneratedPassword, ValidationError};
use crate::metrics::MetricsRegistry;
use crate::service::{HttpRandomSource, RandomSource, ServiceConfig, SourceError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

const UNKNOWN_ERROR: &str = "unknown error";
const TRANSPORT_FALLBACK: &str = "error generating password, please retry";

/// Why a generation attempt failed.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Rejected locally; see [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The wait budget expired and the request was cancelled.
    #[error("request timed out, please retry")]
    Timeout,
    /// The service answered with a non-success code.
    #[error("{0}")]
    Application(String),
    /// Network, status or decoding failure.
    #[error("{0}")]
    Transport(String),
}

impl GenerateError {
    /// Application failure carrying the service message, or a fallback
    /// when the service gave none.
    pub fn application(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => Self::Application(message),
            _ => Self::Application(UNKNOWN_ERROR.to_string()),
        }
    }

    /// Short label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Timeout => "timeout",
            Self::Application(_) => "application",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<SourceError> for GenerateError {
    fn from(e: SourceError) -> Self {
        let message = e.to_string();
        if message.is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            Self::Transport(message)
        }
    }
}

/// Result of one generation attempt.
pub type Outcome = Result<GeneratedPassword, GenerateError>;

/// Issues password generation requests against a random source.
pub struct Generator<S> {
    source: S,
    budget: Duration,
    metrics: Option<Arc<MetricsRegistry>>,
}

impl Generator<HttpRandomSource> {
    /// Creates a generator for the configured HTTP service.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpRandomSource::new(config)?, config.timeout()))
    }
}

impl<S: RandomSource> Generator<S> {
    /// Creates a generator with the given wait budget.
    pub fn new(source: S, budget: Duration) -> Self {
        Self {
            source,
            budget,
            metrics: None,
        }
    }

    /// Records every outcome into `metrics`.
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The underlying random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The wait budget applied to each request.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Generates a password of `length` characters drawn from `alphabet`.
    ///
    /// An empty alphabet fails immediately without contacting the source.
    /// Otherwise exactly one fetch is issued; if it has not completed
    /// within the budget it is dropped, which cancels it.
    pub async fn generate(&self, length: PasswordLength, alphabet: &Alphabet) -> Outcome {
        let started = Instant::now();
        let outcome = self.attempt(length, alphabet).await;

        if let Some(ref metrics) = self.metrics {
            metrics.record(&outcome, started.elapsed());
        }

        match outcome {
            Ok(ref password) => {
                tracing::info!(length = password.len(), "Password generated");
            }
            Err(ref e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Password generation failed");
            }
        }

        outcome
    }

    async fn attempt(&self, length: PasswordLength, alphabet: &Alphabet) -> Outcome {
        if alphabet.is_empty() {
            return Err(ValidationError::NoClassSelected.into());
        }

        tracing::debug!(
            length = length.get(),
            alphabet_len = alphabet.len(),
            budget_ms = self.budget.as_millis() as u64,
            "Requesting random bytes"
        );

        let response = tokio::time::timeout(self.budget, self.source.fetch(length.get()))
            .await
            .map_err(|_| GenerateError::Timeout)??;

        if !response.is_success() {
            tracing::debug!(code = %response.code, "Service reported failure");
            return Err(GenerateError::application(response.message));
        }

        let bytes = response.into_bytes()?;
        Ok(format_password(&bytes, alphabet, length.get())?)
    }
}
