//! Claims domain errors
//!
//! One flat taxonomy for the whole adjudication surface. Every variant is
//! terminal for the current call; nothing here is retried automatically, and
//! `ConcurrentModification` is distinct so the caller can decide to retry
//! with fresh data.

use core_kernel::{ClaimId, Money, MoneyError};
use domain_benefit::CoverageError;
use thiserror::Error;

use crate::claim::ClaimStatus;
use crate::machine::Capability;
use crate::snapshot::RemainingLimits;

/// Errors that can occur while adjudicating claims
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Hard coverage precondition failed (no policy, not effective,
    /// waiting period, missing pre-approval)
    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Illegal state transition from {from:?} to {to:?}")]
    IllegalStateTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Actor lacks the {required:?} capability for {from:?} -> {to:?}")]
    CapabilityRequired {
        required: Capability,
        from: ClaimStatus,
        to: ClaimStatus,
    },

    #[error("A non-blank reviewer comment is required")]
    CommentRequired,

    #[error("A payment reference is required to settle")]
    PaymentReferenceRequired,

    #[error("A positive approved amount is required")]
    ApprovedAmountRequired,

    #[error("A claim needs at least one line before submission")]
    NoClaimLines,

    #[error("Claim lines are immutable once the claim leaves draft")]
    LinesLocked,

    #[error("One coverage decision per claim line is required")]
    DecisionMismatch,

    #[error("Policy limits leave nothing payable on this claim")]
    LimitExceeded { remaining: RemainingLimits },

    #[error("Approved amount {approved} exceeds payable coverage {maximum}")]
    ApprovedAmountExceedsCoverage { approved: Money, maximum: Money },

    #[error("Concurrent modification of claim {claim_id}")]
    ConcurrentModification { claim_id: ClaimId },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl ClaimError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        ClaimError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
