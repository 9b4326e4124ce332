//! Session phase types for the query state machine.

use serde::{Deserialize, Serialize};

use crate::query::QueryResult;

/// Represents the current phase of a query session.
///
/// Exactly one phase holds at any time. Transitions are driven only by
/// submission attempts and their outcomes:
///
/// - Idle → Loading on a valid submit (trimmed query non-empty)
/// - Loading → Success on a parseable success response
/// - Loading → Error on transport failure, non-success status, or a
///   malformed body
/// - Success/Error → Loading on the next valid submit; the prior outcome
///   is cleared when the new submission starts, not when it completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionPhase {
    /// Waiting for user input; nothing submitted or prior output cleared.
    Idle,
    /// A submission is in flight.
    Loading,
    /// The last submission completed with a parsed result.
    Success {
        /// The published result, replacing any prior one.
        result: QueryResult,
    },
    /// The last submission failed.
    Error {
        /// The user-facing message. Always the fixed generic text, never
        /// the underlying technical error.
        message: String,
    },
}

impl SessionPhase {
    /// Check if a submission is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the published result when this phase is Success.
    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            Self::Success { result } => Some(result),
            _ => None,
        }
    }

    /// Returns the user-facing message when this phase is Error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
