//! Claim service
//!
//! The four operations the engine exposes to its caller: create a claim,
//! drive it through a transition, read its cost breakdown, and list the
//! operational queues. The service orchestrates the resolver, the snapshot
//! calculator, the state machine, and the stores; every state write goes
//! through `ClaimStore::commit` together with its audit record.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{ClaimId, EmployerId, MemberId, Money};
use domain_benefit::{
    resolve_coverage, BenefitPolicy, CoverageDecision, CoverageError, Member,
};

use crate::audit::AuditRecord;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::ledger::usage_totals;
use crate::line::ClaimLine;
use crate::machine::{apply_transition, Actor, TransitionPayload};
use crate::ports::{ClaimStore, LimitRecheck, MemberDirectory, PolicyDirectory, PreApprovalDirectory};
use crate::snapshot::{compute_snapshot, validate_approved_amount, FinancialSnapshot};

/// Scope filter for the operational queues
#[derive(Debug, Clone, Default)]
pub struct QueueFilter {
    pub member: Option<MemberId>,
    pub employer: Option<EmployerId>,
}

impl QueueFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_member(member: MemberId) -> Self {
        Self {
            member: Some(member),
            ..Self::default()
        }
    }

    pub fn for_employer(employer: EmployerId) -> Self {
        Self {
            employer: Some(employer),
            ..Self::default()
        }
    }
}

/// Point-in-time view of a claim handed back to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    pub id: ClaimId,
    pub claim_number: String,
    pub member_id: MemberId,
    pub status: ClaimStatus,
    pub requested_amount: Money,
    pub approved_amount: Option<Money>,
    pub patient_copay: Option<Money>,
    pub net_provider_amount: Option<Money>,
    pub version: u64,
}

impl From<&Claim> for ClaimSnapshot {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id,
            claim_number: claim.claim_number.clone(),
            member_id: claim.member_id,
            status: claim.status,
            requested_amount: claim.requested_amount(),
            approved_amount: claim.approved_amount,
            patient_copay: claim.patient_copay,
            net_provider_amount: claim.net_provider_amount,
            version: claim.version,
        }
    }
}

/// Adjudication entry point over the port seams
pub struct ClaimService {
    members: Arc<dyn MemberDirectory>,
    policies: Arc<dyn PolicyDirectory>,
    pre_approvals: Arc<dyn PreApprovalDirectory>,
    claims: Arc<dyn ClaimStore>,
}

impl ClaimService {
    pub fn new(
        members: Arc<dyn MemberDirectory>,
        policies: Arc<dyn PolicyDirectory>,
        pre_approvals: Arc<dyn PreApprovalDirectory>,
        claims: Arc<dyn ClaimStore>,
    ) -> Self {
        Self {
            members,
            policies,
            pre_approvals,
            claims,
        }
    }

    /// Creates a draft claim for a member
    pub fn create_claim(
        &self,
        member_id: MemberId,
        service_date: NaiveDate,
        lines: Vec<ClaimLine>,
    ) -> Result<ClaimId, ClaimError> {
        // Fails early if the member registry does not know the member
        let _ = self.members.member(member_id)?;

        let claim = Claim::draft(member_id, service_date, lines)?;
        let claim_id = claim.id;
        self.claims.insert(claim)?;

        info!(claim = %claim_id, member = %member_id, "claim created in draft");
        Ok(claim_id)
    }

    /// Drives one claim through one transition
    pub fn transition(
        &self,
        claim_id: ClaimId,
        target: ClaimStatus,
        actor: &Actor,
        payload: TransitionPayload,
    ) -> Result<ClaimSnapshot, ClaimError> {
        let mut claim = self.claims.get(claim_id)?;
        let expected_version = claim.version;
        let from = claim.status;

        let committed = match (from, target) {
            (ClaimStatus::Draft, ClaimStatus::Submitted) => {
                // Every line must resolve before the claim may enter the queue
                self.resolve_claim(&claim)?;

                let audit = apply_transition(&mut claim, target, actor, &payload)?;
                self.claims.commit(claim, expected_version, audit, None)?
            }
            (ClaimStatus::UnderReview, ClaimStatus::Approved) => {
                self.approve(claim, expected_version, actor, payload)?
            }
            _ => {
                let audit = apply_transition(&mut claim, target, actor, &payload)?;
                self.claims.commit(claim, expected_version, audit, None)?
            }
        };

        info!(
            claim = %claim_id,
            from = ?from,
            to = ?committed.status,
            actor = %actor.id,
            "claim transition applied"
        );
        Ok(ClaimSnapshot::from(&committed))
    }

    /// Recomputes the financial split for a claim as of now
    ///
    /// Idempotent for an unchanged approved claim: the claim's own
    /// consumption is excluded from the usage totals it is judged against.
    pub fn get_cost_breakdown(&self, claim_id: ClaimId) -> Result<FinancialSnapshot, ClaimError> {
        let claim = self.claims.get(claim_id)?;
        let (member, policy, decisions) = self.resolve_claim(&claim)?;

        let family = self.family_of(&policy, member.id)?;
        let persisted = self.claims.claims_of_members(&family)?;
        let usage = usage_totals(
            &persisted,
            member.id,
            claim.service_date.year(),
            claim.currency,
            Some(claim.id),
        )?;

        compute_snapshot(&claim, &decisions, &policy, &usage)
    }

    /// Claims waiting on the payer (submitted or in review)
    pub fn list_pending(&self, filter: &QueueFilter) -> Result<Vec<ClaimSnapshot>, ClaimError> {
        self.list(&[ClaimStatus::Submitted, ClaimStatus::UnderReview], filter)
    }

    /// Claims approved and awaiting settlement
    pub fn list_approved(&self, filter: &QueueFilter) -> Result<Vec<ClaimSnapshot>, ClaimError> {
        self.list(&[ClaimStatus::Approved], filter)
    }

    /// The full audit trail of a claim, in recording order
    pub fn audit_trail(&self, claim_id: ClaimId) -> Result<Vec<AuditRecord>, ClaimError> {
        self.claims.audit_trail(claim_id)
    }

    fn list(
        &self,
        statuses: &[ClaimStatus],
        filter: &QueueFilter,
    ) -> Result<Vec<ClaimSnapshot>, ClaimError> {
        let mut snapshots = Vec::new();
        for claim in self.claims.by_status(statuses)? {
            if let Some(member_id) = filter.member {
                if claim.member_id != member_id {
                    continue;
                }
            }
            if let Some(employer_id) = filter.employer {
                let member = self.members.member(claim.member_id)?;
                if member.employer_id != employer_id {
                    continue;
                }
            }
            snapshots.push(ClaimSnapshot::from(&claim));
        }
        Ok(snapshots)
    }

    /// Approval: snapshot, machine, then commit with a limit recheck inside
    /// the store's critical section so concurrent claims of the same member
    /// cannot double-spend a shared limit.
    fn approve(
        &self,
        mut claim: Claim,
        expected_version: u64,
        actor: &Actor,
        mut payload: TransitionPayload,
    ) -> Result<Claim, ClaimError> {
        let approved = payload
            .approved_amount
            .ok_or(ClaimError::ApprovedAmountRequired)?;

        let (member, policy, decisions) = self.resolve_claim(&claim)?;
        let family = self.family_of(&policy, member.id)?;
        let persisted = self.claims.claims_of_members(&family)?;
        let year = claim.service_date.year();
        let currency = claim.currency;
        let usage = usage_totals(&persisted, member.id, year, currency, Some(claim.id))?;

        let snapshot = compute_snapshot(&claim, &decisions, &policy, &usage)?;
        payload.snapshot = Some(snapshot);

        let audit = apply_transition(&mut claim, ClaimStatus::Approved, actor, &payload)?;

        let member_id = claim.member_id;
        let claim_id = claim.id;
        let claim_for_recheck = claim.clone();
        let check = move |current: &[Claim]| -> Result<(), ClaimError> {
            let usage = usage_totals(current, member_id, year, currency, Some(claim_id))?;
            let snapshot = compute_snapshot(&claim_for_recheck, &decisions, &policy, &usage)?;
            validate_approved_amount(&snapshot, approved)
        };

        self.claims.commit(
            claim,
            expected_version,
            audit,
            Some(LimitRecheck {
                members: family,
                check: &check,
            }),
        )
    }

    /// Resolves coverage for every line of a claim
    fn resolve_claim(
        &self,
        claim: &Claim,
    ) -> Result<(Member, BenefitPolicy, Vec<CoverageDecision>), ClaimError> {
        let member = self.members.member(claim.member_id)?;
        let policy_id = member
            .policy_id
            .ok_or(CoverageError::NoPolicyAssigned { member: member.id })?;
        let policy = self.policies.policy(policy_id)?;
        let rules = self.policies.rules_for(policy_id)?;
        let pre_approvals = self.pre_approvals.approved_for(member.id)?;

        let mut decisions = Vec::with_capacity(claim.lines().len());
        for line in claim.lines() {
            let decision = resolve_coverage(
                &member,
                &policy,
                &rules,
                line.service_id,
                line.category_id,
                claim.service_date,
                &pre_approvals,
            )?;
            decisions.push(decision);
        }
        Ok((member, policy, decisions))
    }

    /// Members sharing the claim's policy, always including the claimant
    fn family_of(
        &self,
        policy: &BenefitPolicy,
        member_id: MemberId,
    ) -> Result<Vec<MemberId>, ClaimError> {
        let mut members = self.members.members_in_policy(policy.id)?;
        if !members.contains(&member_id) {
            members.push(member_id);
        }
        Ok(members)
    }
}
