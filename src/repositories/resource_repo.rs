//! Generic repository issuing one store statement per operation.

use std::marker::PhantomData;

use super::Record;
use crate::error::{AppError, AppResult};
use crate::store::{SharedStore, StoreError};

/// Repository for one resource type over the shared store session.
pub struct ResourceRepository<E> {
    store: SharedStore,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ResourceRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Record> ResourceRepository<E> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Reads the entity whose key column equals `key`.
    ///
    /// A missing row is reported as an internal error, same as any other
    /// store failure.
    pub async fn fetch(&self, key: &str) -> AppResult<E> {
        let row = self
            .store
            .query_row(&E::select_statement(), vec![key.into()])
            .await
            .map_err(|err| match err {
                StoreError::NotFound => {
                    tracing::debug!(resource = E::RESOURCE, key, "No row for key");
                    AppError::internal(format!("{} not found for key {}", E::RESOURCE, key))
                        .with_cause(err)
                }
                other => {
                    tracing::warn!(resource = E::RESOURCE, key, error = %other, "Store read failed");
                    AppError::internal(format!("unable to find {} in store", E::RESOURCE))
                        .with_cause(other)
                }
            })?;

        E::from_row(&row).map_err(|err| {
            tracing::warn!(resource = E::RESOURCE, key, error = %err, "Row decode failed");
            AppError::internal(format!("unable to find {} in store", E::RESOURCE)).with_cause(err)
        })
    }

    /// Writes the entity and hands it back unchanged.
    pub async fn create(&self, entity: E) -> AppResult<E> {
        self.store
            .execute(&E::insert_statement(), entity.to_params())
            .await
            .map_err(|err| {
                tracing::warn!(resource = E::RESOURCE, key = entity.key(), error = %err, "Store write failed");
                AppError::internal(format!("unable to insert {} in store", E::RESOURCE))
                    .with_cause(err)
            })?;

        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{User, Video};
    use crate::store::{MemoryStore, Row, Statement, Store, Value};

    /// Store that fails every statement with a fixed error.
    struct FailingStore(StoreError);

    #[async_trait]
    impl Store for FailingStore {
        async fn execute(&self, _: &Statement, _: Vec<Value>) -> Result<(), StoreError> {
            Err(self.0.clone())
        }

        async fn query_row(&self, _: &Statement, _: Vec<Value>) -> Result<Row, StoreError> {
            Err(self.0.clone())
        }
    }

    fn user() -> User {
        User {
            id: "1".to_string(),
            email_id: "a@b.com".to_string(),
            age: 30,
            ..User::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let repo = ResourceRepository::<User>::new(Arc::new(MemoryStore::new()));
        let created = repo.create(user()).await.unwrap();
        assert_eq!(created, user());
        assert_eq!(repo.fetch("1").await.unwrap(), user());
    }

    #[tokio::test]
    async fn test_missing_row_is_internal() {
        let repo = ResourceRepository::<Video>::new(Arc::new(MemoryStore::new()));
        let err = repo.fetch("Nothing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "video not found for key Nothing");
        assert_eq!(err.causes(), ["not found"]);
    }

    #[tokio::test]
    async fn test_read_failure_wraps_cause() {
        let store = FailingStore(StoreError::Connection("refused".to_string()));
        let repo = ResourceRepository::<User>::new(Arc::new(store));
        let err = repo.fetch("1").await.unwrap_err();
        assert_eq!(err.message(), "unable to find user in store");
        assert_eq!(err.causes(), ["connection unavailable: refused"]);
    }

    #[tokio::test]
    async fn test_write_failure_wraps_cause() {
        let store = FailingStore(StoreError::Statement("duplicate key".to_string()));
        let repo = ResourceRepository::<User>::new(Arc::new(store));
        let err = repo.create(user()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "unable to insert user in store");
        assert_eq!(err.causes(), ["statement failed: duplicate key"]);
    }
}
