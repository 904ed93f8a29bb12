//! Agent client configuration
//!
//! The generation agent endpoint and bearer credential are injected through
//! the environment. When either is missing or empty the client runs in pure
//! simulation mode and never makes an outbound call.

use std::time::Duration;

/// Configuration for the outbound test-generation agent call
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Agent session endpoint (e.g., "https://api.devin.ai/v1/sessions")
    pub endpoint: String,

    /// Bearer credential for the agent API
    pub token: String,

    /// Maximum time to wait for the agent API to answer
    pub timeout: Duration,
}

impl AgentConfig {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - GENERATION_AGENT_URL (optional; empty disables outbound calls)
    /// - GENERATION_AGENT_TOKEN (optional; empty disables outbound calls)
    pub fn from_env() -> Self {
        let endpoint = std::env::var("GENERATION_AGENT_URL").unwrap_or_default();
        let token = std::env::var("GENERATION_AGENT_TOKEN").unwrap_or_default();

        Self {
            endpoint,
            token,
            timeout: Duration::from_secs(60),
        }
    }

    /// Creates a disabled configuration (simulation mode)
    pub fn disabled() -> Self {
        Self {
            endpoint: String::new(),
            token: String::new(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Whether both the endpoint and credential are set
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.token.is_empty()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::disabled()
    }
}
