//! Service domain types

use serde::{Deserialize, Serialize};

/// A tracked software component with a test-coverage metric
///
/// Structure shared between the server (stores and mutates records) and the
/// agent client (reads records to build generation prompts). `coverage` and
/// `goal` are integer percentages in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub tech_stack: String,
    pub coverage: u8,
    pub goal: u8,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub status: ServiceStatus,
    pub deprecation_risk: DeprecationRisk,
    /// Path to the service's codebase for the generation agent to target.
    /// Empty when no codebase is wired up.
    #[serde(default)]
    pub codebase_path: String,
}

/// Lifecycle state of a service's coverage effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Healthy,
    AtRisk,
    /// Test generation in progress
    Ip,
}

/// How likely a service is to be retired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprecationRisk {
    Low,
    Medium,
    High,
}

impl ServiceStatus {
    /// Wire literal for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::AtRisk => "at-risk",
            ServiceStatus::Ip => "ip",
        }
    }
}

impl DeprecationRisk {
    /// Wire literal for this risk level
    pub fn as_str(&self) -> &'static str {
        match self {
            DeprecationRisk::Low => "low",
            DeprecationRisk::Medium => "medium",
            DeprecationRisk::High => "high",
        }
    }
}
