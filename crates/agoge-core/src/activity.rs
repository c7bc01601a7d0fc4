//! Synthetic activity feed.
//!
//! Iteration `i` is stamped `now - i * gap_i` with an independent gap per
//! iteration, so raw timestamps only trend backwards. The batch is therefore
//! sorted newest-first before it is returned; consumers depend on that order.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use agoge_contracts::{
    activity::{Activity, ActivityId, ActivityKind},
    agent::Agent,
};
use agoge_roster::AgentRoster;

use crate::{
    random::{choose, uuid_from},
    templates::actions_for,
    traits::RandomSource,
};

pub const MIN_GAP_MS: u64 = 30_000;
/// Exclusive.
pub const MAX_GAP_MS: u64 = 300_000;

pub const MIN_FEED_CONFIDENCE: u64 = 75;
pub const MAX_FEED_CONFIDENCE: u64 = 98;
pub const MIN_FEED_OUTPUT: u64 = 500;
pub const MAX_FEED_OUTPUT: u64 = 10_000;

/// Generate exactly `count` activities, sorted by timestamp descending.
///
/// Safe to call repeatedly with small counts to refresh a live feed.
pub fn generate_activity_feed<R>(
    roster: &AgentRoster,
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<Activity>
where
    R: RandomSource + ?Sized,
{
    let pool: Vec<&Agent> = roster.active().collect();
    let mut activities = Vec::with_capacity(count);

    for i in 0..count {
        // AgentRoster guarantees at least one active agent.
        let Some(agent) = choose(rng, &pool) else {
            break;
        };
        let kind = ActivityKind::ALL[rng.index(ActivityKind::ALL.len())];
        let actions = actions_for(kind);
        let action = actions[rng.index(actions.len())];

        let (confidence, expected_output) = if kind == ActivityKind::Proposal {
            (
                Some(rng.range_inclusive(MIN_FEED_CONFIDENCE, MAX_FEED_CONFIDENCE) as u8),
                Some(rng.range_inclusive(MIN_FEED_OUTPUT, MAX_FEED_OUTPUT) as u32),
            )
        } else {
            (None, None)
        };

        let gap = rng.range_inclusive(MIN_GAP_MS, MAX_GAP_MS - 1);
        let timestamp = now - Duration::milliseconds(i as i64 * gap as i64);

        activities.push(Activity {
            id: ActivityId(uuid_from(rng)),
            agent_id: agent.id.clone(),
            kind,
            action: action.to_string(),
            confidence,
            expected_output,
            timestamp,
        });
    }

    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    debug!(count = activities.len(), "generated activity feed");

    activities
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::random::FastRandSource;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn assert_descending(feed: &[Activity]) {
        for pair in feed.windows(2) {
            assert!(
                pair[0].timestamp >= pair[1].timestamp,
                "feed out of order: {} before {}",
                pair[0].timestamp,
                pair[1].timestamp
            );
        }
    }

    #[test]
    fn test_exact_count_and_descending_order() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(8);

        for count in [0usize, 1, 3, 20, 30, 100] {
            let feed = generate_activity_feed(&roster, &mut rng, t0(), count);
            assert_eq!(feed.len(), count);
            assert_descending(&feed);
        }
    }

    #[test]
    fn test_only_proposals_carry_figures() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(9);
        let feed = generate_activity_feed(&roster, &mut rng, t0(), 400);

        let mut saw_proposal = false;
        for activity in &feed {
            if activity.kind == ActivityKind::Proposal {
                saw_proposal = true;
                let confidence = activity.confidence.expect("proposal confidence");
                let output = activity.expected_output.expect("proposal output");
                assert!((75..=98).contains(&confidence));
                assert!((500..=10_000).contains(&output));
            } else {
                assert!(activity.confidence.is_none());
                assert!(activity.expected_output.is_none());
            }
            assert!(actions_for(activity.kind).contains(&activity.action.as_str()));
            assert!(roster.get(&activity.agent_id).is_some());
        }
        assert!(saw_proposal, "400 draws should include a proposal event");
    }

    #[test]
    fn test_timestamps_never_in_future_and_bounded() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(10);
        let count = 25;
        let feed = generate_activity_feed(&roster, &mut rng, t0(), count);

        let oldest_allowed = t0() - Duration::milliseconds((count as i64 - 1) * (MAX_GAP_MS as i64 - 1));
        for activity in &feed {
            assert!(activity.timestamp <= t0());
            assert!(activity.timestamp >= oldest_allowed);
        }
        // Iteration 0 is always stamped exactly `now`.
        assert_eq!(feed[0].timestamp, t0());
    }

    /// Two small refresh batches each keep their own descending order.
    #[test]
    fn test_repeated_small_batches() {
        let roster = AgentRoster::demo().unwrap();
        let mut rng = FastRandSource::seeded(11);

        let first = generate_activity_feed(&roster, &mut rng, t0(), 5);
        let second = generate_activity_feed(&roster, &mut rng, t0() + Duration::seconds(10), 5);

        assert_descending(&first);
        assert_descending(&second);

        let mut merged: Vec<Activity> = second.iter().chain(first.iter()).cloned().collect();
        merged.truncate(50);
        assert_eq!(merged.len(), 10);
        assert_descending(&merged[..5]);
        assert_descending(&merged[5..]);
    }

    #[test]
    fn test_same_seed_same_feed() {
        let roster = AgentRoster::demo().unwrap();
        let a = generate_activity_feed(&roster, &mut FastRandSource::seeded(12), t0(), 20);
        let b = generate_activity_feed(&roster, &mut FastRandSource::seeded(12), t0(), 20);
        assert_eq!(a, b);
    }
}
