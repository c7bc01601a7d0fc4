//! One pass over pending intents, generating agent proposals for each.
//!
//! The sweep never fails as a whole. An intent whose amount cannot be turned
//! into a valid `IntentRequest` is recorded in `SweepReport::errors` and
//! skipped; the remaining intents are still processed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use agoge_contracts::{error::AgogeError, intent::IntentRequest};
use agoge_core::Simulator;

use crate::mock_data::{status_name, PendingIntent};

/// Where pending intents were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepMode {
    /// Hardcoded demo intents; no chain access.
    Simulation,
}

/// Per-intent line of a sweep report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweptIntent {
    pub id: String,
    pub user: String,
    /// Display amount, e.g. `"$1,000 USDC"`.
    pub amount_label: String,
    pub status: String,
    pub proposal_count: usize,
    /// Highest `expected_output` among the generated proposals.
    pub best_output: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub mode: SweepMode,
    pub scanned: usize,
    pub pending_found: usize,
    pub proposals_generated: usize,
    pub intents: Vec<SweptIntent>,
    pub errors: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl SweepReport {
    /// One-line summary for logs:
    /// `[Agoge Sweep] Mode: simulation | Scanned: 3 intents | Pending: 3 | Proposals generated: 12`
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("[Agoge Sweep] Mode: {}", self.mode_label()),
            format!("Scanned: {} intents", self.scanned),
            format!("Pending: {}", self.pending_found),
            format!("Proposals generated: {}", self.proposals_generated),
        ];
        if !self.errors.is_empty() {
            parts.push(format!("Errors: {}", self.errors.len()));
        }
        parts.join(" | ")
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            SweepMode::Simulation => "simulation",
        }
    }
}

/// Generate proposals for every intent in `pending`.
pub fn run_sweep(sim: &mut Simulator, pending: &[PendingIntent]) -> SweepReport {
    let mut report = SweepReport {
        mode: SweepMode::Simulation,
        scanned: pending.len(),
        pending_found: pending.len(),
        proposals_generated: 0,
        intents: Vec::with_capacity(pending.len()),
        errors: Vec::new(),
        timestamp: sim.now(),
    };

    for intent in pending {
        let request = match parse_request(intent) {
            Ok(request) => request,
            Err(e) => {
                warn!(intent_id = %intent.id, error = %e, "skipping pending intent");
                report.errors.push(format!("Intent {} read failed: {}", short_id(&intent.id), e));
                continue;
            }
        };

        let proposals = sim.generate_proposals(&request);
        let best_output = proposals.iter().map(|p| p.expected_output).reduce(f64::max);

        report.proposals_generated += proposals.len();
        report.intents.push(SweptIntent {
            id: intent.id.clone(),
            user: intent.user.clone(),
            amount_label: format!("${} USDC", group_thousands(request.input_amount())),
            status: status_name(0).to_string(),
            proposal_count: proposals.len(),
            best_output,
        });
    }

    info!(
        scanned = report.scanned,
        proposals = report.proposals_generated,
        errors = report.errors.len(),
        "sweep complete"
    );

    report
}

fn parse_request(intent: &PendingIntent) -> Result<IntentRequest, AgogeError> {
    let amount: f64 = intent.amount.trim().parse().map_err(|_| AgogeError::InvalidIntent {
        reason: format!("amount '{}' is not a number", intent.amount),
    })?;
    IntentRequest::new(intent.id.clone(), amount, None)
}

/// First ten characters of an intent id, for compact error lines.
fn short_id(id: &str) -> &str {
    id.char_indices().nth(10).map_or(id, |(i, _)| &id[..i])
}

/// `1234.5` → `"1,234.5"`; at most three fraction digits, trailing zeros dropped.
pub fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}
