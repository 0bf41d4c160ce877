//! HTTP request handlers for API endpoints.
//!
//! Resource handlers are written once and mounted per entity type.

pub mod health;
pub mod resources;
