//! # agoge-core
//!
//! The agent-competition simulation engine.
//!
//! This crate provides:
//! - The two injectable strategy traits (`RandomSource`, `Clock`) and their
//!   standard implementations
//! - The proposal generator, the activity-feed generator and the stats helper
//! - The `Simulator` that bundles them with a roster
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agoge_core::Simulator;
//!
//! let mut sim = Simulator::seeded(Arc::new(AgentRoster::demo()?), 42);
//! let bids = sim.generate_proposals(&IntentRequest::new("intent-1", 1000.0, Some("Gold Token"))?);
//! ```

pub mod activity;
pub mod proposals;
pub mod random;
pub mod simulator;
pub mod stats;
pub mod templates;
pub mod traits;

pub use simulator::Simulator;
