//! Intent types: the validated generator input and the user's intent history record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AgogeError, AgogeResult},
    proposal::Proposal,
};

/// Asset label used when the caller does not name one.
pub const DEFAULT_ASSET_NAME: &str = "RWA Token";

/// A validated request for agents to bid on.
///
/// Construct via `IntentRequest::new`, which enforces the boundary
/// constraints: non-empty id and a finite, positive input amount. Once built,
/// the proposal generator can rely on these without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRequest {
    intent_id: String,
    input_amount: f64,
    asset_name: String,
}

impl IntentRequest {
    pub fn new(
        intent_id: impl Into<String>,
        input_amount: f64,
        asset_name: Option<&str>,
    ) -> AgogeResult<Self> {
        let intent_id = intent_id.into();
        if intent_id.trim().is_empty() {
            return Err(AgogeError::InvalidIntent {
                reason: "intent id must not be empty".to_string(),
            });
        }
        if !input_amount.is_finite() || input_amount <= 0.0 {
            return Err(AgogeError::InvalidIntent {
                reason: format!("input amount must be a positive number, got {}", input_amount),
            });
        }

        let asset_name = match asset_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_ASSET_NAME.to_string(),
        };

        Ok(Self { intent_id, input_amount, asset_name })
    }

    pub fn intent_id(&self) -> &str {
        &self.intent_id
    }

    pub fn input_amount(&self) -> f64 {
        self.input_amount
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }
}

/// Lifecycle state of an intent in the user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStatus {
    Pending,
    Competing,
    Assigned,
    Fulfilled,
    Cancelled,
    Failed,
}

impl IntentStatus {
    /// True once no further proposals or selections can apply.
    pub fn is_final(self) -> bool {
        matches!(self, IntentStatus::Fulfilled | IntentStatus::Cancelled | IntentStatus::Failed)
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntentStatus::Pending => "pending",
            IntentStatus::Competing => "competing",
            IntentStatus::Assigned => "assigned",
            IntentStatus::Fulfilled => "fulfilled",
            IntentStatus::Cancelled => "cancelled",
            IntentStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One intent as kept in a user's history, with the proposals it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub id: String,
    /// Token the user pays with (e.g. "USDC").
    pub input_token: String,
    pub input_amount: f64,
    /// Target asset identifier.
    pub output_token: String,
    pub output_token_name: String,
    pub destination_chain: String,
    pub status: IntentStatus,
    pub proposals: Vec<Proposal>,
    pub selected_proposal: Option<Proposal>,
    pub created_at: DateTime<Utc>,
    /// Confirmed submission transaction, when the intent went on-chain.
    pub tx_hash: Option<String>,
}

impl IntentRecord {
    /// A fresh `Pending` record for `request`, paid in USDC on Base.
    pub fn from_request(request: &IntentRequest, output_token: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: request.intent_id().to_string(),
            input_token: "USDC".to_string(),
            input_amount: request.input_amount(),
            output_token: output_token.into(),
            output_token_name: request.asset_name().to_string(),
            destination_chain: "Base".to_string(),
            status: IntentStatus::Pending,
            proposals: Vec::new(),
            selected_proposal: None,
            created_at: now,
            tx_hash: None,
        }
    }
}
