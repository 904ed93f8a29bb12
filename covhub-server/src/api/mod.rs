//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod service;

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use covhub_agent::AgentClient;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::ServiceStore;

/// Shared application state: the record store and the agent client
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ServiceStore>,
    pub agent: AgentClient,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Service endpoints
        .route("/services", get(service::list_services))
        .route(
            "/services/{id}/generate_tests",
            post(service::generate_tests),
        )
        .route("/services/{id}/mark_complete", post(service::mark_complete))
        // Add state and middleware
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS for the local development frontends
///
/// Credentials are allowed, so methods and headers mirror the request instead
/// of using wildcards.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
