//! Wire format of the random-byte service.

use super::SourceError;
use serde::{Deserialize, Serialize};

/// Value of `code` signalling success.
pub const SUCCESS_CODE: &str = "Success";

/// JSON envelope returned by the service.
///
/// ```json
/// { "code": "Success", "message": "ok", "data": [12, 200, 7] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// `"Success"` or an application-defined failure code.
    pub code: String,
    /// Human-readable reason, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Random values; omitted by the service on failure.
    #[serde(default)]
    pub data: Option<Vec<u32>>,
}

impl ServiceResponse {
    /// Builds a success envelope carrying `bytes`.
    pub fn success(bytes: &[u8]) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            message: None,
            data: Some(bytes.iter().map(|&b| u32::from(b)).collect()),
        }
    }

    /// Builds a failure envelope.
    pub fn failure(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: Some(message.to_string()),
            data: None,
        }
    }

    /// Returns true if the service reported success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Converts the payload into bytes.
    ///
    /// A missing payload yields an empty batch. Any value above 255 makes
    /// the whole batch invalid.
    pub fn into_bytes(self) -> Result<Vec<u8>, SourceError> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                u8::try_from(value).map_err(|_| SourceError::ValueOutOfRange { index, value })
            })
            .collect()
    }
}
