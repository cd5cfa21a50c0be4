//! Wired-up engine fixture
//!
//! Assembles the claim service over the in-memory adapters and exposes the
//! seams, so tests seed policies and members and then drive claims through
//! the service exactly as a caller would.

use std::sync::Arc;

use rust_decimal::Decimal;

use core_kernel::{CategoryId, ClaimId, EmployerId, Money, ServiceId};
use domain_benefit::{BenefitPolicy, BenefitPolicyRule, Member, PreApproval};
use domain_claims::{
    Actor, Capability, ClaimError, ClaimLine, ClaimService, ClaimSnapshot, ClaimStatus,
    TransitionPayload,
};
use infra_memory::{
    InMemoryClaimStore, InMemoryMemberDirectory, InMemoryPolicyDirectory,
    InMemoryPreApprovalDirectory,
};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// The engine plus its seams and one actor per capability
pub struct EngineFixture {
    pub members: Arc<InMemoryMemberDirectory>,
    pub policies: Arc<InMemoryPolicyDirectory>,
    pub pre_approvals: Arc<InMemoryPreApprovalDirectory>,
    pub store: Arc<InMemoryClaimStore>,
    pub service: Arc<ClaimService>,
    pub requester: Actor,
    pub reviewer: Actor,
    pub finance: Actor,
}

impl Default for EngineFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFixture {
    pub fn new() -> Self {
        crate::init_tracing();

        let members = Arc::new(InMemoryMemberDirectory::new());
        let policies = Arc::new(InMemoryPolicyDirectory::new());
        let pre_approvals = Arc::new(InMemoryPreApprovalDirectory::new());
        let store = Arc::new(InMemoryClaimStore::new());

        let service = Arc::new(ClaimService::new(
            members.clone(),
            policies.clone(),
            pre_approvals.clone(),
            store.clone(),
        ));

        Self {
            members,
            policies,
            pre_approvals,
            store,
            service,
            requester: Actor::with_capability(Capability::Requester),
            reviewer: Actor::with_capability(Capability::Reviewer),
            finance: Actor::with_capability(Capability::Finance),
        }
    }

    /// An active plan-year policy: 80% default rate, 10000 annual and 5000
    /// per-member limits, no waiting period
    pub fn default_policy(&self) -> BenefitPolicy {
        let policy = BenefitPolicy::builder(
            EmployerId::new(),
            TemporalFixtures::plan_year_start(),
            TemporalFixtures::plan_year_end(),
        )
        .annual_limit(MoneyFixtures::annual_limit())
        .per_member_limit(MoneyFixtures::per_member_limit())
        .default_coverage_rate(MoneyFixtures::eighty_percent())
        .build()
        .unwrap();
        self.policies.upsert(policy.clone());
        policy
    }

    pub fn seed_policy(&self, policy: BenefitPolicy) -> BenefitPolicy {
        self.policies.upsert(policy.clone());
        policy
    }

    pub fn seed_rule(&self, rule: BenefitPolicyRule) {
        self.policies.add_rule(rule);
    }

    pub fn seed_pre_approval(&self, pre_approval: PreApproval) {
        self.pre_approvals.add(pre_approval);
    }

    /// Enrolls a fresh member of the policy's employer, effective at the
    /// standard fixture enrollment date
    pub fn enroll(&self, policy: &BenefitPolicy) -> Member {
        let member = Member::new(policy.employer_id, TemporalFixtures::enrollment())
            .enrolled_in(policy.id);
        self.members.upsert(member.clone());
        member
    }

    pub fn line(&self, service_id: ServiceId, category_id: CategoryId, amount: Decimal) -> ClaimLine {
        ClaimLine::new(service_id, category_id, 1, MoneyFixtures::usd(amount))
    }

    /// One single-line draft claim at the mid-year service date
    pub fn draft_claim(&self, member: &Member, amount: Decimal) -> Result<ClaimId, ClaimError> {
        self.service.create_claim(
            member.id,
            TemporalFixtures::mid_year_service(),
            vec![self.line(ServiceId::new(), CategoryId::new(), amount)],
        )
    }

    pub fn submit(&self, claim_id: ClaimId) -> Result<ClaimSnapshot, ClaimError> {
        self.service.transition(
            claim_id,
            ClaimStatus::Submitted,
            &self.requester,
            TransitionPayload::default(),
        )
    }

    pub fn start_review(&self, claim_id: ClaimId) -> Result<ClaimSnapshot, ClaimError> {
        self.service.transition(
            claim_id,
            ClaimStatus::UnderReview,
            &self.reviewer,
            TransitionPayload::default(),
        )
    }

    pub fn approve(&self, claim_id: ClaimId, amount: Money) -> Result<ClaimSnapshot, ClaimError> {
        self.service.transition(
            claim_id,
            ClaimStatus::Approved,
            &self.reviewer,
            TransitionPayload::approval(amount),
        )
    }

    pub fn settle(&self, claim_id: ClaimId, reference: &str) -> Result<ClaimSnapshot, ClaimError> {
        self.service.transition(
            claim_id,
            ClaimStatus::Settled,
            &self.finance,
            TransitionPayload::settlement(reference),
        )
    }

    /// Drives a fresh claim to `UnderReview`, ready for a review decision
    pub fn claim_under_review(
        &self,
        member: &Member,
        amount: Decimal,
    ) -> Result<ClaimId, ClaimError> {
        let claim_id = self.draft_claim(member, amount)?;
        self.submit(claim_id)?;
        self.start_review(claim_id)?;
        Ok(claim_id)
    }

    /// Drives a fresh claim all the way to `Approved`
    pub fn approved_claim(
        &self,
        member: &Member,
        requested: Decimal,
        approved: Money,
    ) -> Result<ClaimId, ClaimError> {
        let claim_id = self.claim_under_review(member, requested)?;
        self.approve(claim_id, approved)?;
        Ok(claim_id)
    }
}
