//! Claim Lifecycle Domain
//!
//! This crate implements the claim lifecycle from draft through review to
//! settlement, together with the financial snapshot calculation and the
//! derived usage ledger that backs limit accounting.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft -> Submitted -> UnderReview -> Approved -> Settled
//!                           |-> Rejected (terminal)
//!                           |-> ReturnedForInfo -> Submitted
//! ```
//!
//! Every transition is role-gated by the state machine itself and appends one
//! immutable audit record in the same store commit as the state change.

pub mod audit;
pub mod claim;
pub mod error;
pub mod ledger;
pub mod line;
pub mod machine;
pub mod ports;
pub mod service;
pub mod snapshot;

pub use audit::AuditRecord;
pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use ledger::{consumed_amount, usage_totals, UsageTotals};
pub use line::ClaimLine;
pub use machine::{apply_transition, required_capability, Actor, Capability, TransitionPayload};
pub use ports::{ClaimStore, LimitRecheck, MemberDirectory, PolicyDirectory, PreApprovalDirectory};
pub use service::{ClaimService, ClaimSnapshot, QueueFilter};
pub use snapshot::{
    compute_snapshot, validate_approved_amount, ClampReason, FinancialSnapshot, RemainingLimits,
};
