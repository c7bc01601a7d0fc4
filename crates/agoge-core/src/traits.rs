//! Strategy traits injected into the simulator.
//!
//! - `RandomSource` — every random draw the generators make
//! - `Clock`        — the "now" that timestamps are computed from
//!
//! Production code uses `FastRandSource` and `SystemClock`; tests seed the
//! former and pin the latter with `FixedClock` so structural outcomes are
//! exactly reproducible.

use chrono::{DateTime, Utc};

/// A source of uniform random draws.
///
/// Only three primitive draws are required; everything else the generators
/// need is derived from them by the provided methods.
pub trait RandomSource {
    /// Uniform float in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[low, high]`. Callers guarantee `low <= high`.
    fn range_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Fill `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);

    /// Uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() called with an empty collection");
        self.range_inclusive(0, len.saturating_sub(1) as u64) as usize
    }
}

/// The wall clock the simulator reads "now" from.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
