//! Error types for the agentq client.

use thiserror::Error;

/// A shared error type for the agentq crates.
///
/// This provides typed, structured error variants with constructor helpers
/// and automatic conversion from common error types via the `From` trait.
/// The user-facing display never exposes these; the REPL shows a fixed
/// generic message and logs the underlying variant instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentqError {
    /// Configuration error (bad endpoint, unusable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service answered with a non-success HTTP status
    #[error("Query service returned HTTP {status}")]
    Api { status: u16 },

    /// The service answered successfully but the body did not parse
    #[error("Malformed service response: {message}")]
    Parse { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AgentqError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an Api error from an HTTP status code
    pub fn api(status: u16) -> Self {
        Self::Api { status }
    }

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a transport-level error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a non-success HTTP status error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<serde_json::Error> for AgentqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AgentqError>`.
pub type Result<T> = std::result::Result<T, AgentqError>;
