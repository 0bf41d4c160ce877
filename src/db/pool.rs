//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;

use crate::config::StoreConfig;
use crate::store::StoreError;

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count increment).
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates the async database connection pool from store settings.
///
/// A connection is checked out once before returning so that an unreachable
/// database is reported at startup.
///
/// # Errors
///
/// Returns `StoreError::Connection` if the pool cannot be built or the
/// database cannot be reached.
pub async fn establish_async_connection_pool(
    config: &StoreConfig,
) -> Result<AsyncDbPool, StoreError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.as_str());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    // Verify the database is reachable
    drop(
        pool.get()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?,
    );

    tracing::debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool established"
    );

    Ok(pool)
}
