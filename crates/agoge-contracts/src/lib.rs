//! # agoge-contracts
//!
//! Shared types and error contracts for the Agoge agent-competition simulator.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod activity;
pub mod agent;
pub mod error;
pub mod intent;
pub mod proposal;
pub mod stats;
