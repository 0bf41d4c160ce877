//! Service layer for business logic operations.
//!
//! Services validate inbound entities and normalize lookup keys before
//! delegating to the repository layer.

mod resource_service;

pub use resource_service::ResourceService;

use crate::models::{User, Video};
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying store handle is an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub users: ResourceService<User>,
    pub videos: ResourceService<Video>,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: ResourceService::new(repos.users),
            videos: ResourceService::new(repos.videos),
        }
    }
}
