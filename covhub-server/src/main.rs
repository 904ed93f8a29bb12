use std::sync::Arc;

use covhub_agent::{AgentClient, AgentConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod seed;
pub mod service;
pub mod store;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "covhub_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Coverage Hub server...");

    // Configure the outbound generation agent from the environment
    let agent_config = AgentConfig::from_env();
    if agent_config.is_configured() {
        tracing::info!("Generation agent configured: {}", agent_config.endpoint);
    } else {
        tracing::info!("Generation agent not configured, running in simulation mode");
    }

    let agent = AgentClient::new(agent_config).expect("Failed to build agent HTTP client");

    // Seed the in-memory store; records live for the process lifetime
    let store = Arc::new(store::ServiceStore::new(seed::seed_services()));
    tracing::info!("Seeded {} services", store.len());

    // Build router with all API endpoints
    let app = api::create_router(api::AppState { store, agent });

    // Get bind address
    let addr = std::env::var("COVHUB_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
