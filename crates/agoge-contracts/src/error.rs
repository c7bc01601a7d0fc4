//! Error types for the Agoge simulator.
//!
//! The generators themselves are infallible. Errors arise only at the edges:
//! validating caller input, loading roster configuration, and the caller-side
//! stores.

use thiserror::Error;

use crate::intent::IntentStatus;

/// The unified error type for the Agoge crates.
#[derive(Debug, Error)]
pub enum AgogeError {
    /// Caller-supplied intent data failed boundary validation.
    #[error("invalid intent: {reason}")]
    InvalidIntent { reason: String },

    /// Roster or network configuration is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// No intent with this id exists in the history.
    #[error("intent '{id}' not found")]
    IntentNotFound { id: String },

    /// The intent exists but has no proposal with this id.
    #[error("proposal '{proposal_id}' not found on intent '{intent_id}'")]
    ProposalNotFound { intent_id: String, proposal_id: String },

    /// The intent already reached a final status and accepts no changes.
    #[error("intent '{id}' is already {status}")]
    IntentClosed { id: String, status: IntentStatus },

    /// A caller-supplied argument could not be interpreted.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A value could not be rendered for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// An in-memory store could not be accessed.
    #[error("store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

/// Convenience alias used throughout the Agoge crates.
pub type AgogeResult<T> = Result<T, AgogeError>;
