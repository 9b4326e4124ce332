//! Conversation identity for query correlation.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client-generated correlation token sent with every query in one
/// session.
///
/// The id is composed of the creation timestamp (unix milliseconds) and a
/// random suffix: `conv_<millis>_<suffix>`. It is generated once per
/// session, held in memory for the session's duration, and never persisted
/// or reused across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Generates a fresh identifier from the current time and a random
    /// suffix.
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "conv_{}_{}",
            Utc::now().timestamp_millis(),
            &suffix[..7]
        ))
    }

    /// Wraps an existing identifier.
    ///
    /// Used by tests and by the `--conversation-id` flag to pin the id
    /// instead of generating one.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
