//! Claim state machine
//!
//! The transition table is data: (from, to) maps to the capability allowed
//! to perform it. The machine checks the table, the actor's capabilities,
//! and the payload preconditions itself, independent of any transport layer,
//! and produces the audit record for the transition it applies.
//!
//! Collaborator-dependent preconditions (coverage resolution on submit, the
//! financial snapshot on approval) are computed by the claim service and
//! handed in through the payload; the machine validates them, it does not
//! fetch them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use core_kernel::{ActorId, Money};

use crate::audit::AuditRecord;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::snapshot::{validate_approved_amount, FinancialSnapshot};

/// Capabilities an actor may hold, independent of how the caller derived them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Creates and submits claims (member/employer side)
    Requester,
    /// Reviews, approves, rejects, returns (payer side)
    Reviewer,
    /// Settles approved claims (payer finance)
    Finance,
}

/// The acting identity for one transition call
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub capabilities: Vec<Capability>,
}

impl Actor {
    pub fn new(id: ActorId, capabilities: Vec<Capability>) -> Self {
        Self { id, capabilities }
    }

    pub fn with_capability(capability: Capability) -> Self {
        Self::new(ActorId::new(), vec![capability])
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Data accompanying a transition request
#[derive(Debug, Clone, Default)]
pub struct TransitionPayload {
    /// Reviewer-entered amount, required for approval
    pub approved_amount: Option<Money>,
    /// Required for rejection and return-for-info
    pub comment: Option<String>,
    /// Required for settlement
    pub payment_reference: Option<String>,
    /// Computed by the service for approvals
    pub snapshot: Option<FinancialSnapshot>,
}

impl TransitionPayload {
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            comment: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn approval(approved_amount: Money) -> Self {
        Self {
            approved_amount: Some(approved_amount),
            ..Self::default()
        }
    }

    pub fn settlement(payment_reference: impl Into<String>) -> Self {
        Self {
            payment_reference: Some(payment_reference.into()),
            ..Self::default()
        }
    }
}

/// The transition table: who may move a claim from one state to another
///
/// `None` means the pair is not in the table at all. This is the single
/// source of truth for legality; the audit-trail property tests check
/// recorded history against it.
pub fn required_capability(from: ClaimStatus, to: ClaimStatus) -> Option<Capability> {
    use ClaimStatus::*;
    match (from, to) {
        (Draft, Submitted) => Some(Capability::Requester),
        (Submitted, UnderReview) => Some(Capability::Reviewer),
        (UnderReview, Approved) => Some(Capability::Reviewer),
        (UnderReview, Rejected) => Some(Capability::Reviewer),
        (UnderReview, ReturnedForInfo) => Some(Capability::Reviewer),
        (ReturnedForInfo, Submitted) => Some(Capability::Requester),
        (Approved, Settled) => Some(Capability::Finance),
        _ => None,
    }
}

/// Applies one transition to the claim, returning its audit record
///
/// The caller persists the mutated claim and the audit record in a single
/// store commit; the machine never leaves one without the other.
pub fn apply_transition(
    claim: &mut Claim,
    target: ClaimStatus,
    actor: &Actor,
    payload: &TransitionPayload,
) -> Result<AuditRecord, ClaimError> {
    let from = claim.status;

    let required = required_capability(from, target).ok_or(ClaimError::IllegalStateTransition {
        from,
        to: target,
    })?;
    if !actor.has(required) {
        return Err(ClaimError::CapabilityRequired {
            required,
            from,
            to: target,
        });
    }

    let mut audit_comment = None;
    match (from, target) {
        (ClaimStatus::Draft, ClaimStatus::Submitted) => {
            if claim.lines().is_empty() {
                return Err(ClaimError::NoClaimLines);
            }
        }
        (ClaimStatus::UnderReview, ClaimStatus::Approved) => {
            let approved = payload
                .approved_amount
                .filter(Money::is_positive)
                .ok_or(ClaimError::ApprovedAmountRequired)?;
            let snapshot = payload.snapshot.as_ref().ok_or(ClaimError::DecisionMismatch)?;
            validate_approved_amount(snapshot, approved)?;

            claim.approved_amount = Some(approved);
            claim.patient_copay = Some(snapshot.patient_copay);
            claim.net_provider_amount = Some(snapshot.net_provider_amount);
        }
        (ClaimStatus::UnderReview, ClaimStatus::Rejected)
        | (ClaimStatus::UnderReview, ClaimStatus::ReturnedForInfo) => {
            let comment = payload
                .comment
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or(ClaimError::CommentRequired)?;
            claim.reviewer_comment = Some(comment.to_string());
            audit_comment = Some(comment.to_string());
        }
        (ClaimStatus::Approved, ClaimStatus::Settled) => {
            let reference = payload
                .payment_reference
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or(ClaimError::PaymentReferenceRequired)?;
            claim.settlement_reference = Some(reference.to_string());
        }
        // Submitted -> UnderReview and ReturnedForInfo -> Submitted carry
        // no data preconditions.
        _ => {}
    }

    claim.status = target;
    claim.updated_at = Utc::now();

    Ok(AuditRecord::new(
        claim.id,
        actor.id,
        from,
        target,
        audit_comment,
    ))
}
