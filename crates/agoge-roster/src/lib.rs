//! # agoge-roster
//!
//! A TOML-driven, validated agent roster for the Agoge simulator.
//!
//! ## Overview
//!
//! This crate provides [`AgentRoster`], the immutable set of agents the
//! generators draw from. Rosters are declared in TOML, validated once at
//! construction, and then shared read-only (typically behind an `Arc`).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use agoge_roster::AgentRoster;
//!
//! let roster = AgentRoster::demo()?;
//! assert_eq!(roster.len(), 5);
//! ```

pub mod config;
pub mod roster;

pub use config::{AgentEntry, NetworkTotals, RosterConfig};
pub use roster::AgentRoster;

// ── Tests ─────────────────────────────────────────────────────────────────────
