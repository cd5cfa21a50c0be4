//! In-memory claim store
//!
//! One lock guards claims and audit records together, so a commit is atomic:
//! the version check, the limit recheck, the state write, and the audit
//! append all happen under the same write guard. Stale writers observe
//! `ConcurrentModification` and nothing else changes.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use core_kernel::{ClaimId, MemberId};
use domain_claims::{
    AuditRecord, Claim, ClaimError, ClaimStatus, ClaimStore, LimitRecheck,
};

#[derive(Default)]
struct StoreState {
    claims: HashMap<ClaimId, Claim>,
    audits: Vec<AuditRecord>,
}

/// Claim storage backed by a guarded map plus an append-only audit log
#[derive(Default)]
pub struct InMemoryClaimStore {
    state: RwLock<StoreState>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn insert(&self, claim: Claim) -> Result<(), ClaimError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.claims.insert(claim.id, claim);
        Ok(())
    }

    fn get(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| ClaimError::not_found("Claim", id))
    }

    fn by_status(&self, statuses: &[ClaimStatus]) -> Result<Vec<Claim>, ClaimError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let mut claims: Vec<Claim> = state
            .claims
            .values()
            .filter(|c| statuses.contains(&c.status))
            .cloned()
            .collect();
        claims.sort_by_key(|c| c.created_at);
        Ok(claims)
    }

    fn audit_trail(&self, id: ClaimId) -> Result<Vec<AuditRecord>, ClaimError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .audits
            .iter()
            .filter(|a| a.claim_id == id)
            .cloned()
            .collect())
    }

    fn claims_of_members(&self, members: &[MemberId]) -> Result<Vec<Claim>, ClaimError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .claims
            .values()
            .filter(|c| members.contains(&c.member_id))
            .cloned()
            .collect())
    }

    fn commit(
        &self,
        mut claim: Claim,
        expected_version: u64,
        audit: AuditRecord,
        recheck: Option<LimitRecheck<'_>>,
    ) -> Result<Claim, ClaimError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        let current = state
            .claims
            .get(&claim.id)
            .ok_or_else(|| ClaimError::not_found("Claim", claim.id))?;
        if current.version != expected_version {
            debug!(claim = %claim.id, expected = expected_version, actual = current.version,
                "stale commit rejected");
            return Err(ClaimError::ConcurrentModification { claim_id: claim.id });
        }

        if let Some(recheck) = recheck {
            let others: Vec<Claim> = state
                .claims
                .values()
                .filter(|c| c.id != claim.id && recheck.members.contains(&c.member_id))
                .cloned()
                .collect();
            (recheck.check)(&others)?;
        }

        claim.version = expected_version + 1;
        let committed = claim.clone();
        state.claims.insert(claim.id, claim);
        state.audits.push(audit);
        Ok(committed)
    }
}
