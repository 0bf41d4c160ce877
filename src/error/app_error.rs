use std::fmt;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failure. The HTTP status is derived from the kind and
/// never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "bad_request")]
    BadRequest,
    #[serde(rename = "not_found")]
    NotFound,
    #[serde(rename = "unauthorized")]
    Unauthorized,
    #[serde(rename = "internal_server_error")]
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub const fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire discriminator used in the `error` field of error responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Internal => "internal_server_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped failure carried unchanged from its origin layer up to the
/// HTTP handler.
///
/// `causes` preserves lower-level error text in the order it was attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    causes: Vec<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            causes: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Appends the text of a lower-level error as a cause.
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Appends several causes, keeping their order.
    pub fn with_causes<I, S>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.causes.extend(causes.into_iter().map(Into::into));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    pub fn into_causes(self) -> Vec<String> {
        self.causes
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_kind() {
        assert_eq!(ErrorKind::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::bad_request("x").status().as_u16(), 400);
        assert_eq!(AppError::not_found("x").status().as_u16(), 404);
        assert_eq!(AppError::unauthorized("x").status().as_u16(), 401);
        assert_eq!(AppError::internal("x").status().as_u16(), 500);
    }

    #[test]
    fn test_causes_keep_order() {
        let err = AppError::internal("boom")
            .with_cause("first")
            .with_causes(["second", "third"]);
        assert_eq!(err.causes(), ["first", "second", "third"]);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_kind_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::Internal).unwrap(),
            "\"internal_server_error\""
        );
        let kind: ErrorKind = serde_json::from_str("\"bad_request\"").unwrap();
        assert_eq!(kind, ErrorKind::BadRequest);
    }

    #[test]
    fn test_display() {
        let err = AppError::bad_request("Title can't be empty");
        assert_eq!(err.to_string(), "bad_request: Title can't be empty");
    }
}
