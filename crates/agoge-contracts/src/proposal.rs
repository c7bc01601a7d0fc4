//! Agent bids for a single intent.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::agent::AgentId;

/// Unique identifier for one generated proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalId(pub uuid::Uuid);

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One agent's simulated bid to fulfil an intent.
///
/// Proposals reference their agent by `AgentId`; look the profile up in the
/// roster that produced them. A proposal never changes once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub intent_id: String,
    pub agent_id: AgentId,
    /// Amount the agent expects to deliver, in input-currency units (cents precision).
    ///
    /// Usually at or below the intent's input amount.
    pub expected_output: f64,
    pub estimated_time_secs: u32,
    /// Confidence percentage, 70–98.
    pub confidence: u8,
    pub route: String,
    /// Estimated gas cost in USD.
    pub gas_estimate: f64,
    pub submitted_at: DateTime<Utc>,
    /// Free-form market commentary shown alongside the bid.
    pub analysis: String,
}

impl Proposal {
    /// Shortfall of `expected_output` against `input_amount`, as a percentage.
    pub fn slippage_pct(&self, input_amount: f64) -> f64 {
        if input_amount <= 0.0 {
            return 0.0;
        }
        (input_amount - self.expected_output) / input_amount * 100.0
    }
}
