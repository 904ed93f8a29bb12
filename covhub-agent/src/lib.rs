//! Coverage Hub Agent Client
//!
//! A fire-and-forget HTTP client for the external test-generation agent API.
//!
//! The client builds a natural-language instruction prompt from a [`Service`]
//! record and POSTs it to the configured agent endpoint with a bearer
//! credential. Failure is absorbed by design: transport errors, timeouts and
//! non-2xx responses are logged here at the boundary and collapsed into
//! [`AgentOutcome::Failed`], never propagated to the caller. When the endpoint
//! or credential is unconfigured the call is skipped entirely and the system
//! runs as a pure simulation.
//!
//! # Example
//!
//! ```no_run
//! use covhub_agent::{AgentClient, AgentConfig, AgentOutcome};
//!
//! # async fn example(service: covhub_core::domain::service::Service) {
//! let client = AgentClient::new(AgentConfig::from_env()).unwrap();
//!
//! match client.request_generation(&service).await {
//!     AgentOutcome::Accepted(body) => println!("session created: {body}"),
//!     AgentOutcome::Skipped => println!("simulation mode"),
//!     AgentOutcome::Failed => println!("agent unavailable"),
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod prompt;

pub use config::AgentConfig;
pub use error::AgentError;

use covhub_core::domain::service::Service;
use reqwest::Client;

/// Result of one generation request
///
/// The caller never sees an error: an unreachable or failing agent produces
/// [`AgentOutcome::Failed`], and an unconfigured client produces
/// [`AgentOutcome::Skipped`]. Both are observably equivalent for the caller's
/// control flow; they differ only in logging.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// Agent accepted the request; carries the opaque response body
    Accepted(serde_json::Value),
    /// Endpoint or credential unconfigured, no outbound call made
    Skipped,
    /// Outbound call failed (transport error, timeout, or non-2xx status)
    Failed,
}

impl AgentOutcome {
    /// Whether no outbound call was attempted
    pub fn is_skipped(&self) -> bool {
        matches!(self, AgentOutcome::Skipped)
    }
}

/// HTTP client for the test-generation agent API
#[derive(Debug, Clone)]
pub struct AgentClient {
    config: AgentConfig,
    client: Client,
}

impl AgentClient {
    /// Create a new agent client
    ///
    /// The underlying HTTP client enforces the configured request timeout
    /// (60 seconds by default).
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Request a test-generation session for `service`
    ///
    /// Never fails from the caller's perspective: the outcome records whether
    /// the agent accepted the request, the call was skipped, or the call
    /// failed and was absorbed.
    pub async fn request_generation(&self, service: &Service) -> AgentOutcome {
        if !self.config.is_configured() {
            tracing::debug!(
                service_id = service.id,
                "generation agent not configured, skipping outbound call"
            );
            return AgentOutcome::Skipped;
        }

        match self.send(service).await {
            Ok(body) => {
                tracing::info!(service_id = service.id, "generation session requested");
                AgentOutcome::Accepted(body)
            }
            Err(err) => {
                tracing::warn!(
                    service_id = service.id,
                    "agent call failed: {err}"
                );
                AgentOutcome::Failed
            }
        }
    }

    async fn send(&self, service: &Service) -> Result<serde_json::Value, AgentError> {
        let prompt = prompt::build_prompt(service);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AgentError::api_error(status.as_u16(), error_text));
        }

        // The response body is opaque to us; callers do not depend on its shape
        response.json().await.map_err(AgentError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covhub_core::domain::service::{DeprecationRisk, ServiceStatus};
    use std::time::Duration;

    fn sample_service() -> Service {
        Service {
            id: 7,
            name: "Fraud Detection API".to_string(),
            team: "Security & Fraud".to_string(),
            tech_stack: "Python/FastAPI".to_string(),
            coverage: 82,
            goal: 85,
            last_updated: chrono::Utc::now(),
            status: ServiceStatus::Healthy,
            deprecation_risk: DeprecationRisk::Low,
            codebase_path: String::new(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_client_skips_outbound_call() {
        let client = AgentClient::new(AgentConfig::disabled()).unwrap();

        let outcome = client.request_generation(&sample_service()).await;
        assert_eq!(outcome, AgentOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_missing_token_skips_outbound_call() {
        let config = AgentConfig {
            endpoint: "http://127.0.0.1:9/v1/sessions".to_string(),
            token: String::new(),
            timeout: Duration::from_secs(1),
        };
        let client = AgentClient::new(config).unwrap();

        let outcome = client.request_generation(&sample_service()).await;
        assert!(outcome.is_skipped());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_absorbed_as_failed() {
        // Port 9 (discard) is not listening; the connect error must be
        // absorbed, not propagated.
        let config = AgentConfig {
            endpoint: "http://127.0.0.1:9/v1/sessions".to_string(),
            token: "apk_test".to_string(),
            timeout: Duration::from_secs(1),
        };
        let client = AgentClient::new(config).unwrap();

        let outcome = client.request_generation(&sample_service()).await;
        assert_eq!(outcome, AgentOutcome::Failed);
    }
}
