//! # agoge-feed
//!
//! Caller-side state that sits around the simulator's generators.
//!
//! ## Overview
//!
//! The generators are stateless: they hand back fresh batches and forget
//! them. Anything that must persist between calls lives here:
//!
//! - [`LiveFeed`] — the bounded activity feed, refreshed by prepending small
//!   batches and truncating to a fixed length (50 by default).
//! - [`IntentHistory`] — the user's intents, newest first, with the proposals
//!   each one received and the one that was selected.
//!
//! Both are cheap to clone and safe to share across threads.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agoge_feed::LiveFeed;
//!
//! let feed = LiveFeed::default();
//! feed.replace(sim.generate_activity_feed(30))?;
//! feed.prepend(sim.generate_activity_feed(3))?;
//! ```

pub mod history;
pub mod live;

pub use history::IntentHistory;
pub use live::{FeedSnapshot, LiveFeed, DEFAULT_MAX_LEN};

// ── Tests ─────────────────────────────────────────────────────────────────────
