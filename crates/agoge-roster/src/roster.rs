//! The validated, immutable agent roster.
//!
//! `AgentRoster` is built once from a `RosterConfig` (TOML string, file, the
//! embedded demo roster, or an explicit agent list) and then only read.
//!
//! Validation performed at construction:
//!
//! 1. At least one agent is declared.
//! 2. Agent ids are non-empty and unique.
//! 3. Reputation is within 0–100 and success rate within 0.0–100.0.
//! 4. Addresses are `0x`-prefixed hex.
//! 5. At least one agent is active, so the generators always have a pool.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use agoge_contracts::{
    agent::{Agent, AgentId},
    error::{AgogeError, AgogeResult},
};

use crate::config::{NetworkTotals, RosterConfig};

/// Embedded reference roster: the five demo agents.
const DEMO_ROSTER: &str = include_str!("../rosters/demo.toml");

/// A fixed, ordered collection of agents plus network constants.
///
/// ```rust,ignore
/// use agoge_roster::AgentRoster;
///
/// let roster = AgentRoster::from_file(Path::new("rosters/demo.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct AgentRoster {
    agents: Vec<Agent>,
    network: NetworkTotals,
}

impl AgentRoster {
    /// The embedded five-agent reference roster.
    ///
    /// Returns `AgogeError::ConfigError` only if the embedded file is broken.
    pub fn demo() -> AgogeResult<Self> {
        Self::from_toml_str(DEMO_ROSTER)
    }

    /// Parse `s` as TOML and build a validated roster.
    ///
    /// Returns `AgogeError::ConfigError` if the TOML is malformed, does not
    /// match `RosterConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> AgogeResult<Self> {
        let config: RosterConfig = toml::from_str(s).map_err(|e| AgogeError::ConfigError {
            reason: format!("failed to parse roster TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML roster.
    pub fn from_file(path: &Path) -> AgogeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AgogeError::ConfigError {
            reason: format!("failed to read roster file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_config(config: RosterConfig) -> AgogeResult<Self> {
        let agents = config.agents.into_iter().map(Agent::from).collect();
        Self::from_agents(agents, config.network)
    }

    /// Build a roster from already-constructed agents.
    pub fn from_agents(agents: Vec<Agent>, network: NetworkTotals) -> AgogeResult<Self> {
        validate(&agents)?;

        debug!(
            agent_count = agents.len(),
            active = agents.iter().filter(|a| a.is_active).count(),
            "roster loaded"
        );

        Ok(Self { agents, network })
    }

    /// All agents in declaration order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Agents eligible to compete, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.is_active)
    }

    /// Agents ranked by reputation, highest first. Ties keep declaration order.
    pub fn leaderboard(&self) -> Vec<&Agent> {
        let mut ranked: Vec<&Agent> = self.agents.iter().collect();
        ranked.sort_by(|a, b| b.reputation.cmp(&a.reputation));
        ranked
    }

    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn network(&self) -> &NetworkTotals {
        &self.network
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

fn validate(agents: &[Agent]) -> AgogeResult<()> {
    if agents.is_empty() {
        return Err(config_error("roster must declare at least one agent".to_string()));
    }

    let mut seen = HashSet::new();
    for agent in agents {
        if agent.id.as_str().trim().is_empty() {
            return Err(config_error(format!("agent '{}' has an empty id", agent.name)));
        }
        if !seen.insert(agent.id.as_str()) {
            return Err(config_error(format!("duplicate agent id '{}'", agent.id)));
        }
        if agent.reputation > 100 {
            return Err(config_error(format!(
                "agent '{}' reputation {} exceeds 100",
                agent.id, agent.reputation
            )));
        }
        if !(0.0..=100.0).contains(&agent.success_rate) {
            return Err(config_error(format!(
                "agent '{}' success rate {} is outside 0-100",
                agent.id, agent.success_rate
            )));
        }
        let hex = agent.address.strip_prefix("0x").unwrap_or("");
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(config_error(format!(
                "agent '{}' address '{}' is not 0x-prefixed hex",
                agent.id, agent.address
            )));
        }
    }

    if !agents.iter().any(|a| a.is_active) {
        return Err(config_error("roster has no active agents".to_string()));
    }

    Ok(())
}

fn config_error(reason: String) -> AgogeError {
    warn!(reason = %reason, "rejecting roster configuration");
    AgogeError::ConfigError { reason }
}
