//! Synthetic network events for the live activity feed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{agent::AgentId, error::AgogeError};

/// Unique identifier for one generated activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub uuid::Uuid);

/// Category tag of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Discovery,
    Proposal,
    Fulfillment,
    Analysis,
}

impl ActivityKind {
    /// All kinds, in a fixed order used for uniform selection.
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Discovery,
        ActivityKind::Proposal,
        ActivityKind::Fulfillment,
        ActivityKind::Analysis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Discovery => "discovery",
            ActivityKind::Proposal => "proposal",
            ActivityKind::Fulfillment => "fulfillment",
            ActivityKind::Analysis => "analysis",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = AgogeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AgogeError::InvalidArgument {
                reason: format!("unknown activity kind '{}'", s),
            })
    }
}

/// One synthetic network event.
///
/// `confidence` and `expected_output` are only ever set on
/// `ActivityKind::Proposal` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub agent_id: AgentId,
    pub kind: ActivityKind,
    /// Human-readable action text (e.g. "completed cross-chain transfer to Arbitrum").
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<u32>,
    pub timestamp: DateTime<Utc>,
}
