//! HTTP client and session controller for the agentq query service.

pub mod controller;
pub mod query_api;

pub use controller::{GENERIC_ERROR_MESSAGE, QuerySession};
pub use query_api::{HealthStatus, QueryApiClient, QueryReply, SourceRecord};
