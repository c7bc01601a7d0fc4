//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// Descriptive network-wide counters for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_intents: u64,
    /// Total processed volume in USD.
    pub total_volume: f64,
    pub active_agents: usize,
    pub avg_fulfillment_time_secs: u32,
    /// Percentage, e.g. 94.2.
    pub success_rate: f64,
    pub total_rwas_tracked: u32,
}

impl AggregateStats {
    /// Volume in millions with one decimal: `"$12.5M"`.
    pub fn volume_label(&self) -> String {
        format!("${:.1}M", self.total_volume / 1_000_000.0)
    }

    pub fn success_rate_label(&self) -> String {
        format!("{}%", self.success_rate)
    }

    pub fn fulfillment_time_label(&self) -> String {
        format!("{}s", self.avg_fulfillment_time_secs)
    }
}
