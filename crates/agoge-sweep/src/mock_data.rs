//! Simulated pending intents for the sweep.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! intent router contract that a deployed network would scan.

use serde::{Deserialize, Serialize};

/// A pending intent as read from the router, before its amount is parsed.
///
/// `amount` is kept as the raw decimal string the router reports so that a
/// malformed value is surfaced as a sweep error, not a crash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingIntent {
    pub id: String,
    pub user: String,
    pub amount: String,
}

impl PendingIntent {
    pub fn new(id: impl Into<String>, user: impl Into<String>, amount: impl Into<String>) -> Self {
        Self { id: id.into(), user: user.into(), amount: amount.into() }
    }
}

/// The three intents the demo network always has pending.
pub fn demo_pending_intents() -> Vec<PendingIntent> {
    vec![
        PendingIntent::new("0xdemo_001", "0xUser1", "1000"),
        PendingIntent::new("0xdemo_002", "0xUser2", "5000"),
        PendingIntent::new("0xdemo_003", "0xUser3", "250"),
    ]
}

/// Router status codes, indexed by their on-chain `u8` value.
pub const STATUS_NAMES: [&str; 7] =
    ["Pending", "Active", "Assigned", "Fulfilled", "Cancelled", "Expired", "Failed"];

/// Human-readable name of a router status code; `"Unknown"` when out of range.
pub fn status_name(code: u8) -> &'static str {
    STATUS_NAMES.get(usize::from(code)).copied().unwrap_or("Unknown")
}
