//! # agoge-sweep
//!
//! The periodic pass over pending intents, in simulation mode.
//!
//! Each sweep reads the pending intents (hardcoded demo intents here), asks
//! the simulator for agent proposals on every one of them, and returns a
//! report with per-intent counts and any intents that had to be skipped.
//!
//! All data is hardcoded and fictional. No chain or network access happens.

pub mod mock_data;
pub mod sweep;

pub use mock_data::{demo_pending_intents, status_name, PendingIntent};
pub use sweep::{run_sweep, SweepMode, SweepReport, SweptIntent};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use agoge_core::Simulator;
    use agoge_roster::AgentRoster;

    use super::*;
    use crate::sweep::group_thousands;

    fn simulator() -> Simulator {
        Simulator::seeded(Arc::new(AgentRoster::demo().unwrap()), 2026)
    }

    #[test]
    fn test_demo_sweep_counts() {
        let mut sim = simulator();
        let report = run_sweep(&mut sim, &demo_pending_intents());

        assert_eq!(report.mode, SweepMode::Simulation);
        assert_eq!(report.scanned, 3);
        assert_eq!(report.pending_found, 3);
        assert_eq!(report.intents.len(), 3);
        assert!(report.errors.is_empty());

        let total: usize = report.intents.iter().map(|i| i.proposal_count).sum();
        assert_eq!(report.proposals_generated, total);
        assert!((9..=15).contains(&total));

        let first = &report.intents[0];
        assert_eq!(first.id, "0xdemo_001");
        assert_eq!(first.amount_label, "$1,000 USDC");
        assert_eq!(first.status, "Pending");
        assert!(first.best_output.unwrap() <= 1000.0);
    }

    #[test]
    fn test_bad_amounts_are_collected_not_fatal() {
        let mut sim = simulator();
        let pending = vec![
            PendingIntent::new("0xgood_intent", "0xUser1", "750"),
            PendingIntent::new("0xbad_amount_intent", "0xUser2", "lots"),
            PendingIntent::new("0xzero_amount", "0xUser3", "0"),
        ];

        let report = run_sweep(&mut sim, &pending);
        assert_eq!(report.scanned, 3);
        assert_eq!(report.intents.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("Intent 0xbad_amou read failed"));
        assert!(report.errors[0].contains("not a number"));
        assert!(report.errors[1].contains("positive"));
        assert!(report.summary().ends_with("| Errors: 2"));
    }

    #[test]
    fn test_summary_line() {
        let mut sim = simulator();
        let report = run_sweep(&mut sim, &demo_pending_intents());
        let expected = format!(
            "[Agoge Sweep] Mode: simulation | Scanned: 3 intents | Pending: 3 | Proposals generated: {}",
            report.proposals_generated
        );
        assert_eq!(report.summary(), expected);
    }

    #[test]
    fn test_empty_sweep() {
        let mut sim = simulator();
        let report = run_sweep(&mut sim, &[]);
        assert_eq!(report.scanned, 0);
        assert_eq!(report.proposals_generated, 0);
    }

    #[test]
    fn test_report_serializes_mode_lowercase() {
        let mut sim = simulator();
        let report = run_sweep(&mut sim, &demo_pending_intents());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["mode"], "simulation");
        assert_eq!(value["intents"][1]["amount_label"], "$5,000 USDC");
    }

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(0), "Pending");
        assert_eq!(status_name(3), "Fulfilled");
        assert_eq!(status_name(6), "Failed");
        assert_eq!(status_name(7), "Unknown");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(250.0), "250");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(12_500_000.0), "12,500,000");
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(-9876.125), "-9,876.125");
    }
}
