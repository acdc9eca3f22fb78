//! Random-byte source abstraction and HTTP implementation.

use super::{ServiceConfig, ServiceResponse};
use crate::config::ConfigError;
use reqwest::{Client, Url};
use std::future::Future;
use thiserror::Error;

/// Errors raised while talking to the random-byte service.
///
/// None of these cover an application-level failure: a parseable
/// envelope with a non-success code is returned as `Ok`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Connection, DNS or body read failure.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status without a parseable envelope.
    #[error("service returned HTTP {0}")]
    Status(u16),
    /// 2xx status with a body that is not an envelope.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
    /// A payload value does not fit in a byte.
    #[error("value {value} at index {index} is not an unsigned byte")]
    ValueOutOfRange {
        /// Position in the payload.
        index: usize,
        /// Offending value.
        value: u32,
    },
}

/// Source of random byte batches.
///
/// The returned future is dropped when the caller's wait budget
/// expires, so implementations must tolerate cancellation at any
/// suspension point.
pub trait RandomSource: Send + Sync {
    /// Requests `count` values of type `uint8`.
    fn fetch(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<ServiceResponse, SourceError>> + Send;
}

/// [`RandomSource`] backed by the HTTP service.
#[derive(Debug, Clone)]
pub struct HttpRandomSource {
    client: Client,
    endpoint: Url,
}

impl HttpRandomSource {
    /// Creates a source for the configured service.
    ///
    /// No timeout is set on the client itself; the orchestrator owns
    /// the wait budget.
    pub fn new(config: &ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint()?,
        })
    }

    /// The resolved generate endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RandomSource for HttpRandomSource {
    async fn fetch(&self, count: usize) -> Result<ServiceResponse, SourceError> {
        let length = count.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("length", length.as_str()), ("type", "uint8")])
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        tracing::trace!(
            status = status.as_u16(),
            body_len = body.len(),
            "Random-byte service responded"
        );

        // A non-2xx answer that still carries an envelope is judged by its code
        match serde_json::from_slice::<ServiceResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => Err(SourceError::InvalidBody(e.to_string())),
            Err(_) => Err(SourceError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    /// URL of a local port nothing listens on.
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    async fn source_for(server: &MockServer) -> HttpRandomSource {
        HttpRandomSource::new(&ServiceConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/generate"))
            .and(query_param("length", "12"))
            .and(query_param("type", "uint8"))
            .and(header("X-Requested-With", "XMLHttpRequest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Success",
                "message": "ok",
                "data": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        assert_eq!(
            source.endpoint().as_str(),
            format!("{}/api/v1/generate", server.uri())
        );
        let response = source.fetch(12).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_bytes().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_error_status_with_envelope_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "code": "Error",
                "message": "Too many requests"
            })))
            .mount(&server)
            .await;

        let response = source_for(&server).await.fetch(16).await.unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Too many requests"));
    }

    #[tokio::test]
    async fn test_error_status_without_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let result = source_for(&server).await.fetch(16).await;
        assert_eq!(result, Err(SourceError::Status(502)));
    }

    #[tokio::test]
    async fn test_ok_status_with_garbage_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let result = source_for(&server).await.fetch(16).await;
        assert!(matches!(result, Err(SourceError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let source = HttpRandomSource::new(&ServiceConfig::with_base_url(closed_port_url())).unwrap();
        let result = source.fetch(16).await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
