//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};

use crate::api::handlers::{health::health_routes, resources::resource_routes};
use crate::api::middleware::{
    logging_middleware, method_not_allowed, request_id_middleware, route_not_found,
};
use crate::models::{User, Video};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/user`, `/user/{id}` - User fetch and create
/// - `/video`, `/video/{title}` - Video fetch and create
/// - `/health` - Liveness check
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<User>())
        .merge(resource_routes::<Video>())
        .merge(health_routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
