//! In-process store backend.
//!
//! Tables are append-only: every insert adds a row, and a keyed read returns
//! the most recently written match. Nothing is persisted across restarts.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Row, Statement, Store, StoreError, Value};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: DashMap<&'static str, Vec<Row>>,
    writes: AtomicUsize,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write statements executed so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of read statements executed so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of rows currently held in `table`.
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |rows| rows.len())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn execute(&self, statement: &Statement, params: Vec<Value>) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let Statement::Insert { table } = statement else {
            return Err(StoreError::Statement(format!(
                "execute expects a write statement, got: {}",
                statement.sql()
            )));
        };

        let row = Row::from_columns(table.columns, params)?;
        self.tables.entry(table.name).or_default().push(row);
        Ok(())
    }

    async fn query_row(
        &self,
        statement: &Statement,
        params: Vec<Value>,
    ) -> Result<Row, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let Statement::SelectByKey { table, key_column } = statement else {
            return Err(StoreError::Statement(format!(
                "query_row expects a read statement, got: {}",
                statement.sql()
            )));
        };

        let [key] = params.as_slice() else {
            return Err(StoreError::Statement(format!(
                "expected 1 parameter, got {}",
                params.len()
            )));
        };

        let rows = self.tables.get(table.name).ok_or(StoreError::NotFound)?;
        rows.iter()
            .rev()
            .find(|row| row.get(key_column) == Some(key))
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TableSchema;

    const TABLE: TableSchema = TableSchema::new("videos", &["id", "title"]);

    fn select() -> Statement {
        Statement::select_by_key(TABLE, "title")
    }

    #[tokio::test]
    async fn test_insert_then_select() {
        let store = MemoryStore::new();
        store
            .execute(&Statement::insert(TABLE), vec!["1".into(), "Intro".into()])
            .await
            .unwrap();

        let row = store.query_row(&select(), vec!["Intro".into()]).await.unwrap();
        assert_eq!(row.text("id").unwrap(), "1");
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.read_count(), 1);
    }

    #[tokio::test]
    async fn test_select_missing_row() {
        let store = MemoryStore::new();
        let result = store.query_row(&select(), vec!["nope".into()]).await;
        assert_eq!(result.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_inserts_are_independent_writes() {
        let store = MemoryStore::new();
        let insert = Statement::insert(TABLE);
        store.execute(&insert, vec!["1".into(), "Intro".into()]).await.unwrap();
        store.execute(&insert, vec!["2".into(), "Intro".into()]).await.unwrap();

        assert_eq!(store.row_count("videos"), 2);
        let row = store.query_row(&select(), vec!["Intro".into()]).await.unwrap();
        assert_eq!(row.text("id").unwrap(), "2");
    }

    #[tokio::test]
    async fn test_wrong_parameter_count() {
        let store = MemoryStore::new();
        let result = store.execute(&Statement::insert(TABLE), vec!["1".into()]).await;
        assert!(matches!(result, Err(StoreError::Statement(_))));
    }

    #[tokio::test]
    async fn test_statement_kind_mismatch() {
        let store = MemoryStore::new();
        assert!(store.execute(&select(), vec!["x".into()]).await.is_err());
        assert!(
            store
                .query_row(&Statement::insert(TABLE), vec!["1".into(), "t".into()])
                .await
                .is_err()
        );
    }
}
