//! Service API Handlers
//!
//! HTTP endpoints for the service list and lifecycle transitions.

use axum::{
    Json,
    extract::{Path, State},
};
use covhub_core::domain::service::Service;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::lifecycle_service;

/// GET /services
/// List all services in seed order
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    tracing::debug!("Listing all services");

    Json(lifecycle_service::list_services(&state.store))
}

/// POST /services/{id}/generate_tests
/// Trigger the generation agent and mark the service in progress
pub async fn generate_tests(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Service>> {
    tracing::info!("Generation requested for service: {}", id);

    let service = lifecycle_service::start_generation(&state.store, &state.agent, id)
        .await
        .map_err(|e| match e {
            lifecycle_service::LifecycleError::NotFound(id) => {
                ApiError::NotFound(format!("Service {} not found", id))
            }
        })?;

    Ok(Json(service))
}

/// POST /services/{id}/mark_complete
/// Mark a generation run complete: coverage reaches goal, status settles
pub async fn mark_complete(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Service>> {
    tracing::info!("Marking service complete: {}", id);

    let service = lifecycle_service::mark_complete(&state.store, id).map_err(|e| match e {
        lifecycle_service::LifecycleError::NotFound(id) => {
            ApiError::NotFound(format!("Service {} not found", id))
        }
    })?;

    Ok(Json(service))
}
