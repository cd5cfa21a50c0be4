//! Append-only audit trail
//!
//! One record per successful transition, written in the same store commit as
//! the state change itself. Records are never mutated or deleted; external
//! reporting reads them as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ActorId, AuditRecordId, ClaimId};

use crate::claim::ClaimStatus;

/// One immutable entry in a claim's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditRecordId,
    pub claim_id: ClaimId,
    pub actor_id: ActorId,
    pub from_state: ClaimStatus,
    pub to_state: ClaimStatus,
    /// Present for rejection and return-for-info transitions
    pub comment: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(
        claim_id: ClaimId,
        actor_id: ActorId,
        from_state: ClaimStatus,
        to_state: ClaimStatus,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: AuditRecordId::new_v7(),
            claim_id,
            actor_id,
            from_state,
            to_state,
            comment,
            recorded_at: Utc::now(),
        }
    }
}
