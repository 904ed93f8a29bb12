//! Lifecycle Service
//!
//! Business logic for the service status lifecycle. Three operations: list
//! the records, start a generation run on one record, and mark one record's
//! run complete. The status transitions are effected directly; there is no
//! authoritative transition table, and re-triggering a record already
//! in progress is allowed.

use covhub_agent::AgentClient;
use covhub_core::domain::service::{Service, ServiceStatus};

use crate::store::ServiceStore;

/// Service error type
#[derive(Debug)]
pub enum LifecycleError {
    NotFound(u32),
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

/// List all services in seed order
pub fn list_services(store: &ServiceStore) -> Vec<Service> {
    store.list_all()
}

/// Start a generation run for a service
///
/// Requests a session from the generation agent, then flips the record to
/// in-progress. The agent outcome is recorded in the log only: the status
/// transition tracks the unit of work, which exists whether or not the
/// downstream agent was reachable. Coverage is left untouched until the run
/// is marked complete.
pub async fn start_generation(
    store: &ServiceStore,
    agent: &AgentClient,
    id: u32,
) -> Result<Service> {
    let service = store.find_by_id(id).ok_or(LifecycleError::NotFound(id))?;

    let outcome = agent.request_generation(&service).await;
    tracing::debug!(service_id = id, ?outcome, "generation requested");

    let updated = store
        .update(id, |s| s.status = ServiceStatus::Ip)
        .ok_or(LifecycleError::NotFound(id))?;

    tracing::info!(
        "Generation started for service: {} ({})",
        updated.name,
        updated.id
    );

    Ok(updated)
}

/// Mark a service's generation run complete
///
/// Human-gated: called when a reviewer has merged the generated tests. Brings
/// coverage up to the goal and settles the record back to healthy.
pub fn mark_complete(store: &ServiceStore, id: u32) -> Result<Service> {
    let updated = store
        .update(id, |s| {
            s.coverage = s.goal;
            s.status = ServiceStatus::Healthy;
        })
        .ok_or(LifecycleError::NotFound(id))?;

    tracing::info!(
        "Generation complete for service: {} ({}), coverage now {}%",
        updated.name,
        updated.id,
        updated.coverage
    );

    Ok(updated)
}
