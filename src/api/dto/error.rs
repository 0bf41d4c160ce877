//! Error response DTOs.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Wire format of a failed request.
///
/// `causes` serializes as `null` when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub error: ErrorKind,
    #[serde(default)]
    pub causes: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Parses an error body produced by this service.
    ///
    /// # Errors
    /// Returns a bad request error if the bytes are not a valid error body.
    pub fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::bad_request("Invalid JSON").with_cause(e))
    }

    /// Converts the body back into a domain error.
    ///
    /// The status is re-derived from `error`; a disagreeing `status` field is
    /// ignored.
    pub fn into_app_error(self) -> AppError {
        AppError::new(self.error, self.message).with_causes(self.causes.unwrap_or_default())
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let causes = error.causes();
        Self {
            message: error.message().to_string(),
            status: error.status().as_u16(),
            error: error.kind(),
            causes: (!causes.is_empty()).then(|| causes.to_vec()),
        }
    }
}
