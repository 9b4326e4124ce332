//! Agent classification returned by the query service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The specialized responder that produced an answer.
///
/// The service tags every response with a `domain` string. The set is
/// open-ended on the wire; this client maps the tags it knows and falls
/// back to [`AgentKind::Chat`] for anything else. Adding a new kind is one
/// arm in [`AgentKind::from_domain`] plus a label in [`AgentKind::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Web search responder.
    Web,
    /// Clinical / healthcare document responder.
    Clinical,
    /// Food security and agriculture document responder.
    FoodSecurity,
    /// Fallback for unrecognized domain tags.
    Chat,
}

impl AgentKind {
    /// Maps the wire `domain` tag to an agent kind.
    pub fn from_domain(domain: &str) -> Self {
        match domain {
            "web" => Self::Web,
            "clinical" => Self::Clinical,
            "food_security" => Self::FoodSecurity,
            _ => Self::Chat,
        }
    }

    /// Human-readable label shown next to a response.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Agent",
            Self::Clinical => "Clinical Agent",
            Self::FoodSecurity => "Food Security Agent",
            Self::Chat => "Chat Agent",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
