//! Data Transfer Objects for API requests and responses.
//!
//! Entities are exchanged as-is; only the error body needs its own shape.

mod error;

pub use error::ErrorResponse;
