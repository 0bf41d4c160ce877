//! Row store abstraction.
//!
//! Repositories talk to the backing store only through the [`Store`] trait,
//! which accepts one of the fixed [`Statement`]s plus positional parameters.
//! Two backends are provided:
//! - [`PgStore`] - PostgreSQL through diesel_async and a bb8 pool
//! - [`MemoryStore`] - in-process tables for development and tests

mod error;
mod memory;
mod postgres;
mod row;
mod statement;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use row::{Row, Value};
pub use statement::{Statement, TableSchema};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{StoreBackend, StoreConfig};

/// Session handle to the backing store.
///
/// One instance is created at startup and shared by every repository.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Runs a write statement.
    async fn execute(&self, statement: &Statement, params: Vec<Value>) -> Result<(), StoreError>;

    /// Runs a read statement and returns its single row.
    ///
    /// Returns [`StoreError::NotFound`] when no row matches.
    async fn query_row(&self, statement: &Statement, params: Vec<Value>)
        -> Result<Row, StoreError>;
}

/// Shared store handle injected into repositories.
pub type SharedStore = Arc<dyn Store>;

/// Opens the store session selected by configuration.
///
/// For PostgreSQL this establishes the connection pool and checks out one
/// connection, so an unreachable database fails here rather than on the
/// first request.
pub async fn connect(config: &StoreConfig) -> Result<SharedStore, StoreError> {
    match config.backend {
        StoreBackend::Postgres => Ok(Arc::new(PgStore::connect(config).await?)),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_memory_backend() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..StoreConfig::default()
        };
        let store = connect(&config).await.expect("memory store always connects");

        let table = TableSchema::new("things", &["id"]);
        let result = store
            .query_row(&Statement::select_by_key(table, "id"), vec![Value::from("1")])
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
