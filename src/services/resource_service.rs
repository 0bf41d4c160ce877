//! Generic resource service.
//!
//! Enforces key normalization and field validation, then hands off to the
//! repository. Invalid input never reaches the store.

use crate::error::{AppError, AppResult};
use crate::repositories::{Record, ResourceRepository};

/// Service for one resource type.
///
/// Holds only the repository below it, so cloning is cheap.
pub struct ResourceService<E> {
    repo: ResourceRepository<E>,
}

impl<E> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<E: Record> ResourceService<E> {
    /// Creates a new service with the given repository.
    pub fn new(repo: ResourceRepository<E>) -> Self {
        Self { repo }
    }

    /// Looks up an entity by key.
    ///
    /// Surrounding whitespace is trimmed; a blank key is a bad request.
    /// Repository failures are reported as "not found" internal errors that
    /// keep the original causes.
    pub async fn fetch_by_key(&self, key: &str) -> AppResult<E> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::bad_request(E::EMPTY_KEY_MESSAGE));
        }

        self.repo.fetch(key).await.map_err(|err| {
            AppError::internal(format!("{} not found for key {}", E::LABEL, key))
                .with_causes(err.into_causes())
        })
    }

    /// Validates and stores a new entity.
    ///
    /// The entity's own rules run first. Its key must then be one that
    /// `fetch_by_key` can reach, so blank or whitespace-padded keys are
    /// rejected.
    pub async fn create(&self, entity: E) -> AppResult<E> {
        if let Err(err) = entity.validate().and_then(|()| check_key::<E>(entity.key())) {
            tracing::debug!(resource = E::RESOURCE, reason = err.message(), "Rejected invalid entity");
            return Err(err);
        }

        self.repo.create(entity).await
    }
}

fn check_key<E: Record>(key: &str) -> AppResult<()> {
    if key.trim().is_empty() {
        return Err(AppError::internal(E::EMPTY_KEY_MESSAGE));
    }

    if key.trim() != key {
        return Err(AppError::internal(format!(
            "{} key can't have leading or trailing whitespace",
            E::LABEL
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Entity, User, Video};
    use crate::store::MemoryStore;

    fn service<E: Record>() -> (ResourceService<E>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let repo = ResourceRepository::new(store.clone());
        (ResourceService::new(repo), store)
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            full_name: "Grace Hopper".to_string(),
            age: 85,
            email_id: "grace@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_key_skips_repository() {
        let (svc, store) = service::<User>();
        for key in ["", " ", "\t\n "] {
            let err = svc.fetch_by_key(key).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadRequest);
            assert_eq!(err.message(), User::EMPTY_KEY_MESSAGE);
        }
        assert_eq!(store.read_count(), 0);
    }

    #[tokio::test]
    async fn test_key_is_trimmed() {
        let (svc, _store) = service::<User>();
        svc.create(user("7")).await.unwrap();
        assert_eq!(svc.fetch_by_key("  7 ").await.unwrap(), user("7"));
    }

    #[tokio::test]
    async fn test_missing_entity_reports_label_and_cause() {
        let (svc, _store) = service::<User>();
        let err = svc.fetch_by_key("999").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "User not found for key 999");
        assert_eq!(err.causes(), ["not found"]);
    }

    #[tokio::test]
    async fn test_invalid_entity_skips_repository() {
        let (svc, store) = service::<Video>();
        let err = svc.create(Video::default()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "Title can't be blank");
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_keys_are_rejected() {
        let (users, user_store) = service::<User>();
        let err = users.create(user("")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), User::EMPTY_KEY_MESSAGE);

        let err = users.create(user(" 7")).await.unwrap_err();
        assert_eq!(err.message(), "User key can't have leading or trailing whitespace");
        assert_eq!(user_store.write_count(), 0);

        let (videos, video_store) = service::<Video>();
        let video = Video {
            title: "Launch ".to_string(),
            ..Video::default()
        };
        let err = videos.create(video).await.unwrap_err();
        assert_eq!(err.message(), "Video key can't have leading or trailing whitespace");
        assert_eq!(video_store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_field_rules_run_before_key_check() {
        let (svc, _store) = service::<User>();
        let err = svc.create(User { age: -1, ..user("") }).await.unwrap_err();
        assert_eq!(err.message(), "Age can't be less than 0");
    }

    #[tokio::test]
    async fn test_create_is_not_idempotent() {
        let (svc, store) = service::<User>();
        svc.create(user("1")).await.unwrap();
        svc.create(user("1")).await.unwrap();
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.row_count("users"), 2);
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("Failed to build runtime")
    }

    proptest! {
        #[test]
        fn prop_valid_user_round_trips(
            id in "[a-z0-9]{1,12}",
            age in 0i32..150,
            email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        ) {
            let (svc, _store) = service::<User>();
            let created = User { age, email_id: email, ..user(&id) };
            let fetched = runtime().block_on(async {
                svc.create(created.clone()).await.unwrap();
                svc.fetch_by_key(created.key()).await.unwrap()
            });
            prop_assert_eq!(fetched, created);
        }

        #[test]
        fn prop_created_user_is_fetchable(id in "\\PC{0,12}") {
            let (svc, store) = service::<User>();
            let created = user(&id);
            let fetched = runtime().block_on(async {
                match svc.create(created.clone()).await {
                    Ok(_) => Some(svc.fetch_by_key(created.key()).await),
                    Err(_) => None,
                }
            });
            match fetched {
                Some(result) => prop_assert_eq!(result.unwrap(), created),
                None => prop_assert_eq!(store.write_count(), 0),
            }
        }

        #[test]
        fn prop_negative_age_never_written(age in i32::MIN..0) {
            let (svc, store) = service::<User>();
            let result = runtime().block_on(svc.create(User { age, ..user("1") }));
            prop_assert!(result.is_err());
            prop_assert_eq!(store.write_count(), 0);
        }

        #[test]
        fn prop_blank_title_never_written(title in "[ \t]{0,6}") {
            let (svc, store) = service::<Video>();
            let video = Video { title, ..Video::default() };
            let result = runtime().block_on(svc.create(video));
            prop_assert!(result.is_err());
            prop_assert_eq!(store.write_count(), 0);
        }
    }
}
