//! Roster configuration schema.
//!
//! A `RosterConfig` is deserialized from TOML and holds an ordered list of
//! `AgentEntry`s plus the network-wide counters shown on the dashboard.
//! Declaration order is display order.

use serde::{Deserialize, Serialize};

use agoge_contracts::agent::{Agent, AgentId};

/// One agent as written in the roster file.
///
/// Example in TOML:
/// ```toml
/// [[agents]]
/// id = "agent-001"
/// name = "TreasuryHawk"
/// avatar = "🦅"
/// specializations = ["treasuries", "bonds"]
/// address = "0x7a3B1F62c2E5d8A4b9C0D3e2F1a5B8c7D6e4F3a2"
/// reputation = 94
/// total_fulfillments = 847
/// success_rate = 96.2
/// avg_execution_time_secs = 28
/// stake = 5.2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub address: String,
    pub reputation: u8,
    #[serde(default)]
    pub total_fulfillments: u64,
    pub success_rate: f64,
    pub avg_execution_time_secs: u32,
    #[serde(default)]
    pub stake: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<AgentEntry> for Agent {
    fn from(entry: AgentEntry) -> Self {
        Agent {
            id: AgentId(entry.id),
            name: entry.name,
            avatar: entry.avatar,
            specializations: entry.specializations,
            address: entry.address,
            reputation: entry.reputation,
            total_fulfillments: entry.total_fulfillments,
            success_rate: entry.success_rate,
            avg_execution_time_secs: entry.avg_execution_time_secs,
            stake: entry.stake,
            is_active: entry.is_active,
        }
    }
}

/// Fixed network-wide counters reported by the stats helper.
///
/// Every field falls back to the reference network's value when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkTotals {
    pub total_intents: u64,
    pub total_volume: f64,
    pub avg_fulfillment_time_secs: u32,
    pub success_rate: f64,
    pub total_rwas_tracked: u32,
}

impl Default for NetworkTotals {
    fn default() -> Self {
        Self {
            total_intents: 2847,
            total_volume: 12_500_000.0,
            avg_fulfillment_time_secs: 34,
            success_rate: 94.2,
            total_rwas_tracked: 156,
        }
    }
}

/// The top-level structure deserialized from a TOML roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub network: NetworkTotals,
    /// Ordered list of agents.
    pub agents: Vec<AgentEntry>,
}
