//! Database connection pool module.
//!
//! Provides the async PostgreSQL session used by the postgres store backend.

mod pool;

pub use pool::{AsyncDbPool, establish_async_connection_pool};
