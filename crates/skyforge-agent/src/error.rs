//! Error types for model backend invocation.

use thiserror::Error;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// The backend call itself failed (transport, status, service error)
    #[error("Model backend error: {0}")]
    Backend(String),

    /// The backend answered with a shape the client does not understand
    #[error("Unexpected backend response: {0}")]
    UnexpectedResponse(String),

    /// Backend client construction failed
    #[error("Backend configuration error: {0}")]
    Configuration(String),
}

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Backend(format!("HTTP request error: {}", err))
    }
}
