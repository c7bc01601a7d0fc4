//! The `Simulator`: roster, random source and clock bundled behind the three
//! public operations.
//!
//! One simulator owns one random stream. Sharing a roster across several
//! simulators is cheap because it sits behind an `Arc` and is never mutated.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use agoge_contracts::{
    activity::Activity, intent::IntentRequest, proposal::Proposal, stats::AggregateStats,
};
use agoge_roster::AgentRoster;

use crate::{
    activity::generate_activity_feed,
    proposals::generate_proposals,
    random::{uuid_from, FastRandSource, SystemClock},
    stats::aggregate_stats,
    traits::{Clock, RandomSource},
};

pub struct Simulator {
    roster: Arc<AgentRoster>,
    rng: Box<dyn RandomSource + Send>,
    clock: Box<dyn Clock + Send>,
}

impl Simulator {
    pub fn new(
        roster: Arc<AgentRoster>,
        rng: Box<dyn RandomSource + Send>,
        clock: Box<dyn Clock + Send>,
    ) -> Self {
        Self { roster, rng, clock }
    }

    /// Reproducible random stream, real wall clock.
    pub fn seeded(roster: Arc<AgentRoster>, seed: u64) -> Self {
        info!(seed, agents = roster.len(), "simulator created with fixed seed");
        Self::new(roster, Box::new(FastRandSource::seeded(seed)), Box::new(SystemClock))
    }

    pub fn with_entropy(roster: Arc<AgentRoster>) -> Self {
        Self::new(roster, Box::new(FastRandSource::from_entropy()), Box::new(SystemClock))
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    /// The simulator clock's current instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// A fresh id drawn from the simulator's random stream, so seeded runs
    /// repeat it.
    pub fn next_uuid(&mut self) -> uuid::Uuid {
        uuid_from(self.rng.as_mut())
    }

    /// Bids from 3–5 distinct active agents, ordered by arrival.
    pub fn generate_proposals(&mut self, request: &IntentRequest) -> Vec<Proposal> {
        let now = self.clock.now();
        generate_proposals(&self.roster, self.rng.as_mut(), now, request)
    }

    /// Exactly `count` activities, newest first.
    pub fn generate_activity_feed(&mut self, count: usize) -> Vec<Activity> {
        let now = self.clock.now();
        generate_activity_feed(&self.roster, self.rng.as_mut(), now, count)
    }

    pub fn aggregate_stats(&self) -> AggregateStats {
        aggregate_stats(&self.roster)
    }
}
