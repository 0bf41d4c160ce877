//! Repository layer for data access operations.
//!
//! Each resource gets a [`ResourceRepository`] that issues exactly one store
//! statement per operation.

mod record;
mod resource_repo;

pub use record::Record;
pub use resource_repo::ResourceRepository;

use crate::models::{User, Video};
use crate::store::SharedStore;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap since the store handle is an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub users: ResourceRepository<User>,
    pub videos: ResourceRepository<Video>,
}

impl Repositories {
    /// Creates all repositories over the shared store session.
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: ResourceRepository::new(store.clone()),
            videos: ResourceRepository::new(store),
        }
    }
}
