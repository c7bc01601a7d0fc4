//! Agent identity and profile types.
//!
//! An `Agent` is a named, reputation-scored synthetic competitor. Agents are
//! defined once when a roster is built and are never mutated afterwards;
//! proposals and activities refer to them by `AgentId` only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, human-readable identifier for a roster agent.
///
/// Example: AgentId("agent-001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The full, immutable profile of one simulated agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Display name (e.g. "TreasuryHawk").
    pub name: String,
    /// Single visual glyph shown next to the name.
    pub avatar: String,
    /// Specialization tags (e.g. `["treasuries", "bonds"]`).
    pub specializations: Vec<String>,
    /// 0x-prefixed on-chain address the agent would settle from.
    pub address: String,
    /// Reputation score, 0–100. Softly biases bid quality upward.
    pub reputation: u8,
    /// Lifetime number of fulfilled intents.
    pub total_fulfillments: u64,
    /// Success rate as a percentage (0.0–100.0).
    pub success_rate: f64,
    /// Average execution time in seconds.
    pub avg_execution_time_secs: u32,
    /// Staked collateral.
    pub stake: f64,
    pub is_active: bool,
}

impl Agent {
    /// Reputation mapped to `[0.0, 1.0]`.
    pub fn quality(&self) -> f64 {
        f64::from(self.reputation.min(100)) / 100.0
    }

    /// True if the agent carries the given specialization tag.
    pub fn specializes_in(&self, tag: &str) -> bool {
        self.specializations.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }

    /// Address shortened for display: `0x7a3B...F3a2`.
    pub fn short_address(&self) -> String {
        const CHARS: usize = 4;
        if self.address.len() <= CHARS * 2 + 2 {
            return self.address.clone();
        }
        format!(
            "{}...{}",
            &self.address[..CHARS + 2],
            &self.address[self.address.len() - CHARS..]
        )
    }
}
