//! The user's intent history.
//!
//! Newest intents come first. Records are updated in place as the
//! competition progresses: proposals are attached while agents compete, one
//! is selected, and the intent is eventually marked fulfilled. Once an intent
//! reaches a final status its record is frozen.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use agoge_contracts::{
    error::{AgogeError, AgogeResult},
    intent::{IntentRecord, IntentStatus},
    proposal::{Proposal, ProposalId},
};

/// A shareable, newest-first log of intents.
#[derive(Debug, Clone, Default)]
pub struct IntentHistory {
    records: Arc<Mutex<Vec<IntentRecord>>>,
}

impl IntentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` at the front of the history.
    pub fn add(&self, record: IntentRecord) -> AgogeResult<()> {
        let mut records = self.lock()?;
        info!(intent_id = %record.id, status = %record.status, "intent recorded");
        records.insert(0, record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> AgogeResult<IntentRecord> {
        let records = self.lock()?;
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AgogeError::IntentNotFound { id: id.to_string() })
    }

    pub fn update_status(&self, id: &str, status: IntentStatus) -> AgogeResult<()> {
        self.with_record(id, |record| {
            record.status = status;
            Ok(())
        })
    }

    /// Replace the intent's proposals and mark it as competing.
    pub fn attach_proposals(&self, id: &str, proposals: Vec<Proposal>) -> AgogeResult<()> {
        self.with_record(id, |record| {
            record.proposals = proposals;
            record.status = IntentStatus::Competing;
            Ok(())
        })
    }

    /// Pick one of the intent's proposals as the winner and mark it assigned.
    pub fn select_proposal(&self, id: &str, proposal_id: ProposalId) -> AgogeResult<Proposal> {
        self.with_record(id, |record| {
            let Some(winner) = record.proposals.iter().find(|p| p.id == proposal_id).cloned() else {
                warn!(intent_id = %record.id, proposal_id = %proposal_id, "selected proposal not on intent");
                return Err(AgogeError::ProposalNotFound {
                    intent_id: record.id.clone(),
                    proposal_id: proposal_id.to_string(),
                });
            };
            record.selected_proposal = Some(winner.clone());
            record.status = IntentStatus::Assigned;
            Ok(winner)
        })
    }

    /// All records, newest first.
    pub fn all(&self) -> AgogeResult<Vec<IntentRecord>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> AgogeResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> AgogeResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn with_record<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut IntentRecord) -> AgogeResult<T>,
    ) -> AgogeResult<T> {
        let mut records = self.lock()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AgogeError::IntentNotFound { id: id.to_string() })?;
        if record.status.is_final() {
            warn!(intent_id = %record.id, status = %record.status, "intent is closed");
            return Err(AgogeError::IntentClosed { id: record.id.clone(), status: record.status });
        }
        f(record)
    }

    fn lock(&self) -> AgogeResult<MutexGuard<'_, Vec<IntentRecord>>> {
        self.records.lock().map_err(|e| AgogeError::StoreUnavailable {
            reason: format!("intent history lock poisoned: {}", e),
        })
    }
}
