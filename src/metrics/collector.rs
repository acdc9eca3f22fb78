//! Metrics collection and registry.

use crate::generator::{GenerateError, Outcome};
use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for generation monitoring.
pub struct MetricsRegistry {
    registry: Registry,

    generations_total: IntCounter,
    successes_total: IntCounter,

    // Failure counters, one per kind
    validation_errors_total: IntCounter,
    timeouts_total: IntCounter,
    application_errors_total: IntCounter,
    transport_errors_total: IntCounter,

    last_latency_seconds: Gauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all generation metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let generations_total = IntCounter::new(
            "entropy_password_generations_total",
            "Total number of generation attempts",
        )?;
        let successes_total = IntCounter::new(
            "entropy_password_successes_total",
            "Total number of passwords produced",
        )?;
        let validation_errors_total = IntCounter::new(
            "entropy_password_validation_errors_total",
            "Attempts rejected for missing classes or insufficient random data",
        )?;
        let timeouts_total = IntCounter::new(
            "entropy_password_timeouts_total",
            "Requests cancelled after exceeding the wait budget",
        )?;
        let application_errors_total = IntCounter::new(
            "entropy_password_application_errors_total",
            "Responses whose code signalled failure",
        )?;
        let transport_errors_total = IntCounter::new(
            "entropy_password_transport_errors_total",
            "Network, status or body decoding failures",
        )?;
        let last_latency_seconds = Gauge::new(
            "entropy_password_last_latency_seconds",
            "Duration of the most recent generation attempt",
        )?;

        registry.register(Box::new(generations_total.clone()))?;
        registry.register(Box::new(successes_total.clone()))?;
        registry.register(Box::new(validation_errors_total.clone()))?;
        registry.register(Box::new(timeouts_total.clone()))?;
        registry.register(Box::new(application_errors_total.clone()))?;
        registry.register(Box::new(transport_errors_total.clone()))?;
        registry.register(Box::new(last_latency_seconds.clone()))?;

        Ok(Self {
            registry,
            generations_total,
            successes_total,
            validation_errors_total,
            timeouts_total,
            application_errors_total,
            transport_errors_total,
            last_latency_seconds,
        })
    }

    /// Records one finished attempt.
    pub fn record(&self, outcome: &Outcome, elapsed: Duration) {
        self.generations_total.inc();
        self.last_latency_seconds.set(elapsed.as_secs_f64());

        match outcome {
            Ok(_) => self.successes_total.inc(),
            Err(GenerateError::Validation(_)) => self.validation_errors_total.inc(),
            Err(GenerateError::Timeout) => self.timeouts_total.inc(),
            Err(GenerateError::Application(_)) => self.application_errors_total.inc(),
            Err(GenerateError::Transport(_)) => self.transport_errors_total.inc(),
        }
    }

    /// Total attempts recorded so far.
    pub fn generations(&self) -> u64 {
        self.generations_total.get()
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = MetricsRegistry::new();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_record_counts_by_kind() {
        let registry = MetricsRegistry::new().unwrap();

        registry.record(&Err(GenerateError::Timeout), Duration::from_secs(8));
        registry.record(
            &Err(GenerateError::Transport("refused".to_string())),
            Duration::from_millis(3),
        );
        registry.record(&Err(GenerateError::Timeout), Duration::from_millis(250));

        assert_eq!(registry.generations(), 3);
        let output = registry.encode().unwrap();
        assert!(output.contains("entropy_password_timeouts_total 2"));
        assert!(output.contains("entropy_password_transport_errors_total 1"));
        assert!(output.contains("entropy_password_successes_total 0"));
        assert!(output.contains("entropy_password_last_latency_seconds 0.25"));
    }

    #[test]
    fn test_metrics_encode() {
        let registry = MetricsRegistry::new().unwrap();
        let output = registry.encode().unwrap();

        assert!(output.contains("entropy_password_generations_total"));
        assert!(output.contains("entropy_password_validation_errors_total"));
        assert!(output.contains("entropy_password_application_errors_total"));
    }
}
