//! Proposal generation: agents competing for one intent.
//!
//! Per call:
//!
//!   shuffle active agents → keep 3..=5 → shared baseline fee → per-agent bid
//!
//! The baseline fee (0–5 %) is drawn once and shared by every responder. Each
//! agent then shaves up to a further 3 % off it, scaled by `1 - reputation/100`,
//! so better-reputed agents tend to quote closer to the baseline.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use agoge_contracts::{
    agent::Agent,
    intent::IntentRequest,
    proposal::{Proposal, ProposalId},
};
use agoge_roster::AgentRoster;

use crate::{
    random::{shuffle, uuid_from},
    templates::{random_route, render_analysis},
    traits::RandomSource,
};

pub const MIN_RESPONDERS: u64 = 3;
pub const MAX_RESPONDERS: u64 = 5;

/// Upper bound (exclusive) of the shared baseline fee.
pub const MAX_BASE_FEE: f64 = 0.05;
/// Upper bound (exclusive) of the per-agent variation before reputation scaling.
pub const MAX_AGENT_VARIATION: f64 = 0.03;

pub const MIN_ESTIMATED_SECS: u64 = 15;
pub const MAX_ESTIMATED_SECS: u64 = 90;
pub const MIN_CONFIDENCE: u64 = 70;
pub const MAX_CONFIDENCE: u64 = 98;
pub const MIN_GAS: f64 = 0.5;
pub const MAX_GAS: f64 = 2.5;

/// Arrival gap between consecutive proposals, in milliseconds: `[1000, 4000)`.
pub const MIN_STAGGER_MS: u64 = 1_000;
pub const MAX_STAGGER_MS: u64 = 4_000;

/// Generate the competing bids for `request`.
///
/// Returns between 3 and 5 proposals (fewer only if the roster has fewer
/// active agents), each from a distinct agent. The first proposal is stamped
/// `now`; each later one arrives 1–4 s after its predecessor, so
/// `submitted_at` is non-decreasing in the returned order.
pub fn generate_proposals<R>(
    roster: &AgentRoster,
    rng: &mut R,
    now: DateTime<Utc>,
    request: &IntentRequest,
) -> Vec<Proposal>
where
    R: RandomSource + ?Sized,
{
    let mut responders: Vec<&Agent> = roster.active().collect();
    shuffle(rng, &mut responders);
    let wanted = rng.range_inclusive(MIN_RESPONDERS, MAX_RESPONDERS) as usize;
    responders.truncate(wanted);

    let base_output = request.input_amount() * (1.0 - rng.next_f64() * MAX_BASE_FEE);

    let mut proposals = Vec::with_capacity(responders.len());
    let mut submitted_at = now;

    for (index, agent) in responders.into_iter().enumerate() {
        if index > 0 {
            let stagger = rng.range_inclusive(MIN_STAGGER_MS, MAX_STAGGER_MS - 1);
            submitted_at += Duration::milliseconds(stagger as i64);
        }

        let variation = 1.0 - rng.next_f64() * MAX_AGENT_VARIATION * (1.0 - agent.quality());
        let expected_output = (base_output * variation * 100.0).floor() / 100.0;

        proposals.push(Proposal {
            id: ProposalId(uuid_from(rng)),
            intent_id: request.intent_id().to_string(),
            agent_id: agent.id.clone(),
            expected_output,
            estimated_time_secs: rng.range_inclusive(MIN_ESTIMATED_SECS, MAX_ESTIMATED_SECS) as u32,
            confidence: rng.range_inclusive(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8,
            route: random_route(rng).to_string(),
            gas_estimate: rng.uniform(MIN_GAS, MAX_GAS),
            submitted_at,
            analysis: render_analysis(rng, request.asset_name()),
        });
    }

    debug!(
        intent_id = %request.intent_id(),
        input_amount = request.input_amount(),
        responders = proposals.len(),
        base_output,
        "generated proposals"
    );

    proposals
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::TimeZone;

    use agoge_contracts::agent::AgentId;
    use agoge_roster::NetworkTotals;

    use super::*;
    use crate::{random::FastRandSource, templates::ROUTES};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn agent(id: &str, reputation: u8) -> Agent {
        Agent {
            id: AgentId::new(id),
            name: format!("Agent {id}"),
            avatar: "*".to_string(),
            specializations: vec![],
            address: "0x01".to_string(),
            reputation,
            total_fulfillments: 0,
            success_rate: 90.0,
            avg_execution_time_secs: 30,
            stake: 1.0,
            is_active: true,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn gold_intent() -> IntentRequest {
        IntentRequest::new("intent-1", 1000.0, Some("Gold Token")).unwrap()
    }

    /// Returns the top of every range and just under 1.0 for floats.
    struct Ceiling;

    impl RandomSource for Ceiling {
        fn next_f64(&mut self) -> f64 {
            1.0 - f64::EPSILON
        }
        fn range_inclusive(&mut self, _low: u64, high: u64) -> u64 {
            high
        }
        fn fill_bytes(&mut self, buf: &mut [u8]) {
            buf.fill(0xAB);
        }
    }

    // ── Structural properties ─────────────────────────────────────────────────

    #[test]
    fn test_returns_three_to_five_distinct_agents() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(1);

        for _ in 0..500 {
            let proposals = generate_proposals(&roster, &mut rng, t0(), &gold_intent());
            assert!((3..=5).contains(&proposals.len()), "got {} proposals", proposals.len());

            let agents: HashSet<&AgentId> = proposals.iter().map(|p| &p.agent_id).collect();
            assert_eq!(agents.len(), proposals.len(), "duplicate agent in one call");
            assert!(proposals.iter().all(|p| roster.get(&p.agent_id).is_some()));
        }
    }

    #[test]
    fn test_every_agent_gets_to_bid() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(11);
        let mut bids: HashMap<AgentId, usize> = HashMap::new();

        for _ in 0..500 {
            for p in generate_proposals(&roster, &mut rng, t0(), &gold_intent()) {
                *bids.entry(p.agent_id).or_default() += 1;
            }
        }

        assert_eq!(bids.len(), roster.len());
        for agent in roster.agents() {
            let count = bids.get(&agent.id).copied().unwrap_or(0);
            // Each agent is picked in at least 3 of 5 slots on average.
            assert!(count > 250, "{} bid only {count} times in 500 calls", agent.name);
        }
    }

    #[test]
    fn test_submission_times_staggered_in_order() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(2);

        for _ in 0..500 {
            let proposals = generate_proposals(&roster, &mut rng, t0(), &gold_intent());
            assert_eq!(proposals[0].submitted_at, t0());

            for pair in proposals.windows(2) {
                let gap = (pair[1].submitted_at - pair[0].submitted_at).num_milliseconds();
                assert!((1_000..4_000).contains(&gap), "gap {gap}ms outside [1000, 4000)");
            }
        }
    }

    #[test]
    fn test_field_ranges_and_route_catalogue() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(3);

        for _ in 0..500 {
            for p in generate_proposals(&roster, &mut rng, t0(), &gold_intent()) {
                assert!((70..=98).contains(&p.confidence));
                assert!((15..=90).contains(&p.estimated_time_secs));
                assert!((MIN_GAS..MAX_GAS).contains(&p.gas_estimate));
                assert!(ROUTES.contains(&p.route.as_str()));
                assert!(!p.analysis.contains('{'), "unsubstituted analysis: {}", p.analysis);
                assert_eq!(p.intent_id, "intent-1");
            }
        }
    }

    /// 1000 USD in → every bid lands in [900, 1000] with cent precision.
    #[test]
    fn test_gold_token_outputs_within_fee_band() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(4);

        for _ in 0..500 {
            for p in generate_proposals(&roster, &mut rng, t0(), &gold_intent()) {
                assert!(
                    (900.0..=1000.0).contains(&p.expected_output),
                    "expected_output {} outside [900, 1000]",
                    p.expected_output
                );
                let cents = p.expected_output * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "not cent precision: {}", p.expected_output);
            }
        }
    }

    #[test]
    fn test_proposal_ids_unique_within_call() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(5);
        let proposals = generate_proposals(&roster, &mut rng, t0(), &gold_intent());

        let ids: HashSet<ProposalId> = proposals.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), proposals.len());
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn test_same_seed_same_proposals() {
        let roster = AgentRoster::demo().unwrap();
        let a = generate_proposals(&roster, &mut FastRandSource::seeded(99), t0(), &gold_intent());
        let b = generate_proposals(&roster, &mut FastRandSource::seeded(99), t0(), &gold_intent());
        assert_eq!(a, b);
    }

    /// With every draw at its maximum the bounds are hit exactly.
    #[test]
    fn test_ceiling_draws_hit_upper_bounds() {
        let roster = AgentRoster::from_agents(
            vec![agent("a", 100), agent("b", 0), agent("c", 50), agent("d", 50), agent("e", 50)],
            NetworkTotals::default(),
        )
        .unwrap();

        let proposals = generate_proposals(&roster, &mut Ceiling, t0(), &gold_intent());
        assert_eq!(proposals.len(), 5);

        for p in &proposals {
            assert_eq!(p.confidence, 98);
            assert_eq!(p.estimated_time_secs, 90);
            assert_eq!(p.route, ROUTES[4]);
            assert!(p.gas_estimate < MAX_GAS);
            assert!(p.expected_output >= 921.0, "floor of 1000 * 0.95 * 0.97 is 921.5");
        }

        let last = proposals.last().unwrap();
        assert_eq!((last.submitted_at - t0()).num_milliseconds(), 4 * 3_999);
    }

    // ── Small rosters ─────────────────────────────────────────────────────────

    #[test]
    fn test_small_roster_returns_every_active_agent() {
        let mut inactive = agent("sleeper", 99);
        inactive.is_active = false;
        let roster = AgentRoster::from_agents(
            vec![agent("a", 80), inactive, agent("b", 60)],
            NetworkTotals::default(),
        )
        .unwrap();

        let mut rng = FastRandSource::seeded(6);
        for _ in 0..50 {
            let proposals = generate_proposals(&roster, &mut rng, t0(), &gold_intent());
            assert_eq!(proposals.len(), 2);
            assert!(proposals.iter().all(|p| p.agent_id.as_str() != "sleeper"));
        }
    }

    // ── Reputation bias ───────────────────────────────────────────────────────

    /// Across 1000 calls the reputation-90 agent out-bids the reputation-70
    /// agent on average.
    #[test]
    fn test_higher_reputation_yields_higher_mean_output() {
        let roster = AgentRoster::from_agents(
            vec![agent("strong", 90), agent("weak", 70), agent("mid", 80)],
            NetworkTotals::default(),
        )
        .unwrap();
        let mut rng = FastRandSource::seeded(2026);

        let (mut strong_sum, mut weak_sum) = (0.0, 0.0);
        for _ in 0..1000 {
            for p in generate_proposals(&roster, &mut rng, t0(), &gold_intent()) {
                match p.agent_id.as_str() {
                    "strong" => strong_sum += p.expected_output,
                    "weak" => weak_sum += p.expected_output,
                    _ => {}
                }
            }
        }

        assert!(
            strong_sum / 1000.0 >= weak_sum / 1000.0,
            "strong mean {} < weak mean {}",
            strong_sum / 1000.0,
            weak_sum / 1000.0
        );
    }
}
