use thiserror::Error;

/// Failures reported by a [`Store`](super::Store) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The read statement matched no row.
    #[error("not found")]
    NotFound,

    /// No connection could be obtained from the session.
    #[error("connection unavailable: {0}")]
    Connection(String),

    /// The store rejected or failed to run the statement.
    #[error("statement failed: {0}")]
    Statement(String),

    /// A returned row could not be mapped onto the entity.
    #[error("cannot decode column '{column}': {reason}")]
    Decode { column: String, reason: String },
}

impl StoreError {
    pub fn decode(column: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Decode {
            column: column.into(),
            reason: reason.into(),
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => StoreError::NotFound,
            other => StoreError::Statement(other.to_string()),
        }
    }
}
