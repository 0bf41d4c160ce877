//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request handlers.

use axum::extract::FromRef;

use crate::models::{User, Video};
use crate::repositories::Repositories;
use crate::services::{ResourceService, Services};
use crate::store::SharedStore;

/// Application state containing all shared services.
///
/// Cloning is cheap since every service only holds the `Arc` store handle.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates a new AppState over an already established store session.
    ///
    /// # Example
    /// ```ignore
    /// let store = store::connect(&settings.store).await?;
    /// let state = AppState::new(store);
    /// ```
    pub fn new(store: SharedStore) -> Self {
        let repos = Repositories::new(store);
        Self {
            services: Services::new(repos),
        }
    }
}

impl FromRef<AppState> for ResourceService<User> {
    fn from_ref(state: &AppState) -> Self {
        state.services.users.clone()
    }
}

impl FromRef<AppState> for ResourceService<Video> {
    fn from_ref(state: &AppState) -> Self {
        state.services.videos.clone()
    }
}
