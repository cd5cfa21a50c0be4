//! Port traits for external collaborators
//!
//! The engine consumes member, policy, and pre-approval data through these
//! seams and persists claims through the claim store. Adapters (in-memory
//! for tests, a database in a deployment) implement them; the domain logic
//! never touches storage directly.

use core_kernel::{ClaimId, MemberId, PolicyId};
use domain_benefit::{BenefitPolicy, BenefitPolicyRule, Member, PreApproval};

use crate::audit::AuditRecord;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;

/// Member registry, an external collaborator
pub trait MemberDirectory: Send + Sync {
    fn member(&self, id: MemberId) -> Result<Member, ClaimError>;

    /// All members currently enrolled in a policy, for family-scope limits
    fn members_in_policy(&self, policy_id: PolicyId) -> Result<Vec<MemberId>, ClaimError>;
}

/// Policy directory, an external collaborator
pub trait PolicyDirectory: Send + Sync {
    fn policy(&self, id: PolicyId) -> Result<BenefitPolicy, ClaimError>;

    fn rules_for(&self, id: PolicyId) -> Result<Vec<BenefitPolicyRule>, ClaimError>;
}

/// Pre-approval registry, an external collaborator
pub trait PreApprovalDirectory: Send + Sync {
    /// Approved authorizations held by a member
    fn approved_for(&self, member_id: MemberId) -> Result<Vec<PreApproval>, ClaimError>;
}

/// A limit recheck executed inside the store's commit critical section
///
/// The check receives the currently persisted claims of every listed member
/// (the claim being committed excluded) and decides whether the commit may
/// proceed. This closes the double-spend window between snapshot computation
/// and commit for concurrent claims of the same member.
pub struct LimitRecheck<'a> {
    pub members: Vec<MemberId>,
    pub check: &'a (dyn Fn(&[Claim]) -> Result<(), ClaimError> + Send + Sync),
}

/// Persistent claim storage
///
/// `commit` is the only write path for existing claims. It must atomically:
/// verify the expected version (stale writers get `ConcurrentModification`),
/// run the limit recheck if one is supplied, write the claim with a bumped
/// version, and append the audit record. A state write without its audit
/// write must be impossible.
pub trait ClaimStore: Send + Sync {
    fn insert(&self, claim: Claim) -> Result<(), ClaimError>;

    fn get(&self, id: ClaimId) -> Result<Claim, ClaimError>;

    fn by_status(&self, statuses: &[ClaimStatus]) -> Result<Vec<Claim>, ClaimError>;

    fn audit_trail(&self, id: ClaimId) -> Result<Vec<AuditRecord>, ClaimError>;

    /// Claims of the given members, any status
    fn claims_of_members(&self, members: &[MemberId]) -> Result<Vec<Claim>, ClaimError>;

    fn commit(
        &self,
        claim: Claim,
        expected_version: u64,
        audit: AuditRecord,
        recheck: Option<LimitRecheck<'_>>,
    ) -> Result<Claim, ClaimError>;
}
