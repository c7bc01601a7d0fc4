//! Dashboard counters derived from the roster.

use agoge_contracts::stats::AggregateStats;
use agoge_roster::AgentRoster;

/// Network constants from the roster config plus the live active-agent count.
///
/// Pure and deterministic.
pub fn aggregate_stats(roster: &AgentRoster) -> AggregateStats {
    let network = roster.network();
    AggregateStats {
        total_intents: network.total_intents,
        total_volume: network.total_volume,
        active_agents: roster.active().count(),
        avg_fulfillment_time_secs: network.avg_fulfillment_time_secs,
        success_rate: network.success_rate,
        total_rwas_tracked: network.total_rwas_tracked,
    }
}
