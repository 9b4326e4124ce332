//! Query result domain models and display rows.

use serde::{Deserialize, Serialize};

use crate::agent::AgentKind;

/// A citation record supporting a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Document title, always shown.
    pub title: String,
    /// Page number, shown only when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Relevance score in [0, 1], shown as a rounded whole percentage
    /// when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

impl Source {
    /// Relevance rounded to the nearest whole percent.
    pub fn relevance_percent(&self) -> Option<u32> {
        self.relevance.map(|r| (r * 100.0).round() as u32)
    }

    /// One display row for this source.
    ///
    /// Title always, page and relevance only when present:
    /// `Doc A — Page: 12 — Relevance: 87%`.
    pub fn display_line(&self) -> String {
        let mut parts = vec![self.title.clone()];
        if let Some(page) = self.page {
            parts.push(format!("Page: {}", page));
        }
        if let Some(percent) = self.relevance_percent() {
            parts.push(format!("Relevance: {}%", percent));
        }
        parts.join(" — ")
    }
}

/// The parsed outcome of one successful query submission.
///
/// A new result replaces any prior one; nothing is accumulated across
/// submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The answer text, rendered verbatim.
    pub response: String,
    /// Supporting citations, in service order. May be empty, in which
    /// case no sources section is rendered.
    pub sources: Vec<Source>,
    /// Which specialized responder handled the query.
    pub agent: AgentKind,
    /// Classifier confidence reported by the service. Logged for
    /// diagnostics, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
