//! Concrete strategies and sampling helpers.

use chrono::{DateTime, Utc};

use crate::traits::{Clock, RandomSource};

/// `RandomSource` backed by `fastrand`'s wyrand generator.
///
/// Seed it for reproducible runs; `from_entropy` for the live demo.
#[derive(Debug, Clone)]
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: fastrand::Rng::new() }
    }
}

impl RandomSource for FastRandSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.f64()
    }

    fn range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.rng.u64(low..=high)
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.rng.u8(..);
        }
    }
}

/// Reads the real UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ── Sampling helpers ──────────────────────────────────────────────────────────

/// Pick one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// In-place Fisher–Yates shuffle; every permutation is equally likely.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.range_inclusive(0, i as u64) as usize;
        items.swap(i, j);
    }
}

/// A version-4 UUID built from the source's bytes, so seeded runs repeat ids.
pub fn uuid_from<R>(rng: &mut R) -> uuid::Uuid
where
    R: RandomSource + ?Sized,
{
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
