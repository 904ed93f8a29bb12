//! Error types for the agent client

use thiserror::Error;

/// Errors that can occur when calling the generation agent API
///
/// These never escape the client: they are logged at the call boundary and
/// collapsed into [`crate::AgentOutcome::Failed`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// HTTP request failed (connect error, timeout, malformed response)
    #[error("agent request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Agent API returned a non-2xx status code
    #[error("agent API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the agent API
        message: String,
    },
}

impl AgentError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}
