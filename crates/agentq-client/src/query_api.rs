//! REST client for the multi-agent query service.
//!
//! Wraps the two endpoints the service exposes: `POST /query` for
//! submitting a user query and `GET /health` for a liveness probe. Any
//! non-success HTTP status is a uniform failure regardless of body
//! content.

use std::time::Duration;

use agentq_core::{AgentKind, AgentqError, ClientConfig, ConversationId, QueryResult, Result, Source};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client for the query service REST API.
#[derive(Debug, Clone)]
pub struct QueryApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    // Always empty in this design; the service accepts prior context here.
    context: Map<String, Value>,
    conversation_id: &'a str,
}

/// Parsed body of a successful `POST /query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<SourceRecord>,
    pub domain: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One citation entry in a query reply.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    pub title: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub relevance: Option<f64>,
}

/// Parsed body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub document_collections: Vec<String>,
}

impl From<SourceRecord> for Source {
    fn from(record: SourceRecord) -> Self {
        Source {
            title: record.title,
            page: record.page,
            relevance: record.relevance,
        }
    }
}

impl From<QueryReply> for QueryResult {
    fn from(reply: QueryReply) -> Self {
        QueryResult {
            response: reply.response,
            sources: reply.sources.into_iter().map(Source::from).collect(),
            agent: AgentKind::from_domain(&reply.domain),
            confidence: reply.confidence,
        }
    }
}

impl QueryApiClient {
    /// Creates a client for the configured service endpoint.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.endpoint.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Submits one query and returns the parsed reply.
    pub async fn query(
        &self,
        query: &str,
        conversation_id: &ConversationId,
    ) -> Result<QueryReply> {
        let url = format!("{}/query", self.base_url);
        let body = QueryRequest {
            query,
            context: Map::new(),
            conversation_id: conversation_id.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| AgentqError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentqError::api(status.as_u16()));
        }

        response
            .json::<QueryReply>()
            .await
            .map_err(|e| AgentqError::parse(e.to_string()))
    }

    /// Probes the service liveness endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| AgentqError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentqError::api(status.as_u16()));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AgentqError::parse(e.to_string()))
    }
}
