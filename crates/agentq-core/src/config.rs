//! Client configuration.
//!
//! The endpoint is resolved with explicit precedence: a value passed in by
//! the caller (CLI flag) wins over the `AGENTQ_ENDPOINT` environment
//! variable, which wins over the default local service address.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AgentqError, Result};

/// Default address of a locally running query service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the query service client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the query service, without a trailing slash.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Resolves the configuration from an optional explicit endpoint and
    /// the environment.
    pub fn resolve(endpoint: Option<String>) -> Result<Self> {
        let endpoint = endpoint
            .or_else(|| env::var("AGENTQ_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint)
    }

    /// Builds a configuration for the given endpoint.
    ///
    /// Rejects empty endpoints and ones that are not http(s) URLs; a
    /// trailing slash is stripped so path joining stays uniform.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(AgentqError::config("endpoint must not be empty"));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(AgentqError::config(format!(
                "endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }
        Ok(Self {
            endpoint,
            ..Self::default()
        })
    }

    /// Sets the per-request timeout in seconds.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}
