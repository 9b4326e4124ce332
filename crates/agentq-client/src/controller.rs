//! Query session controller.
//!
//! Owns the conversation identity and the session phase state machine and
//! issues at most one outbound request per submission. Technical failures
//! are logged here and replaced with a fixed generic message for display.

use agentq_core::{ClientConfig, ConversationId, SessionPhase};
use tracing::{debug, error};

use crate::query_api::QueryApiClient;

/// The only failure text ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Failed to get response from the agent. Please try again.";

/// Drives one user-visible query session.
///
/// The controller holds the conversation id for the session's lifetime and
/// moves through [`SessionPhase`] on each submission. Callers render the
/// phase; the controller never prints.
pub struct QuerySession {
    client: QueryApiClient,
    conversation_id: ConversationId,
    phase: SessionPhase,
}

impl QuerySession {
    /// Creates a session with a freshly generated conversation id.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_conversation_id(config, ConversationId::generate())
    }

    /// Creates a session with an explicit conversation id.
    ///
    /// Tests and the `--conversation-id` flag use this to pin the id.
    pub fn with_conversation_id(config: &ClientConfig, conversation_id: ConversationId) -> Self {
        Self {
            client: QueryApiClient::new(config),
            conversation_id,
            phase: SessionPhase::Idle,
        }
    }

    /// The correlation token sent with every query in this session.
    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// The current phase of the session.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Borrow the underlying API client, e.g. for the health probe.
    pub fn client(&self) -> &QueryApiClient {
        &self.client
    }

    /// Submits the query text and returns the resulting phase.
    ///
    /// A query that is empty after trimming is a no-op: no request is
    /// issued and the phase is unchanged. Otherwise the prior outcome is
    /// cleared immediately (phase becomes Loading), exactly one request is
    /// issued with the raw untrimmed text, and the phase settles on
    /// Success or Error. No retry is attempted.
    pub async fn submit(&mut self, query: &str) -> &SessionPhase {
        if query.trim().is_empty() {
            return &self.phase;
        }

        self.phase = SessionPhase::Loading;

        match self.client.query(query, &self.conversation_id).await {
            Ok(reply) => {
                debug!(
                    domain = %reply.domain,
                    confidence = ?reply.confidence,
                    sources = reply.sources.len(),
                    "query answered"
                );
                self.phase = SessionPhase::Success {
                    result: reply.into(),
                };
            }
            Err(err) => {
                error!(error = %err, "query submission failed");
                self.phase = SessionPhase::Error {
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                };
            }
        }

        &self.phase
    }
}
