//! Generic fetch/create handlers, instantiated for each resource.

use axum::{
    Json, Router,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};

use crate::error::{AppError, AppResult};
use crate::repositories::Record;
use crate::services::ResourceService;
use crate::state::AppState;

/// Creates the routes for one resource.
///
/// Routes:
/// - POST /{resource}        - Create an entity
/// - GET  /{resource}/{key}  - Fetch an entity by key
/// - GET  /{resource}/       - Fetch with an empty key (always a bad request)
pub fn resource_routes<E>() -> Router<AppState>
where
    E: Record,
    ResourceService<E>: FromRef<AppState>,
{
    let base = format!("/{}", E::RESOURCE);

    Router::new()
        .route(&base, post(create::<E>))
        .route(&format!("{base}/"), get(fetch_empty::<E>))
        .route(&format!("{base}/{{key}}"), get(fetch::<E>))
}

/// GET /{resource}/{key}
async fn fetch<E: Record>(
    State(service): State<ResourceService<E>>,
    key: Result<Path<String>, PathRejection>,
) -> AppResult<Json<E>> {
    let Path(key) = key.map_err(|rejection| {
        AppError::bad_request("Invalid path parameter").with_cause(rejection.body_text())
    })?;

    let entity = service.fetch_by_key(&key).await?;
    Ok(Json(entity))
}

/// GET /{resource}/
async fn fetch_empty<E: Record>(State(service): State<ResourceService<E>>) -> AppResult<Json<E>> {
    let entity = service.fetch_by_key("").await?;
    Ok(Json(entity))
}

/// POST /{resource}
///
/// A body that does not parse as the entity is rejected before the service
/// is called.
async fn create<E: Record>(
    State(service): State<ResourceService<E>>,
    payload: Result<Json<E>, JsonRejection>,
) -> AppResult<(StatusCode, Json<E>)> {
    let Json(entity) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid JSON body").with_cause(rejection.body_text())
    })?;

    let created = service.create(entity).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
