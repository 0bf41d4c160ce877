//! Command handlers for CLI operations

pub mod serve;

pub use serve::ServeCommandHandler;
