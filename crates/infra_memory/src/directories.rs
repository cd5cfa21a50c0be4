//! In-memory member, policy, and pre-approval directories

use std::collections::HashMap;
use std::sync::RwLock;

use core_kernel::{MemberId, PolicyId};
use domain_benefit::{BenefitPolicy, BenefitPolicyRule, Member, PreApproval, PreApprovalStatus};
use domain_claims::{ClaimError, MemberDirectory, PolicyDirectory, PreApprovalDirectory};

/// Member registry backed by a map
#[derive(Default)]
pub struct InMemoryMemberDirectory {
    members: RwLock<HashMap<MemberId, Member>>,
}

impl InMemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, member: Member) {
        self.members
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(member.id, member);
    }
}

impl MemberDirectory for InMemoryMemberDirectory {
    fn member(&self, id: MemberId) -> Result<Member, ClaimError> {
        self.members
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or_else(|| ClaimError::not_found("Member", id))
    }

    fn members_in_policy(&self, policy_id: PolicyId) -> Result<Vec<MemberId>, ClaimError> {
        let members = self.members.read().unwrap_or_else(|e| e.into_inner());
        Ok(members
            .values()
            .filter(|m| m.policy_id == Some(policy_id))
            .map(|m| m.id)
            .collect())
    }
}

/// Policy and rule registry backed by maps
#[derive(Default)]
pub struct InMemoryPolicyDirectory {
    policies: RwLock<HashMap<PolicyId, BenefitPolicy>>,
    rules: RwLock<HashMap<PolicyId, Vec<BenefitPolicyRule>>>,
}

impl InMemoryPolicyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, policy: BenefitPolicy) {
        self.policies
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(policy.id, policy);
    }

    pub fn add_rule(&self, rule: BenefitPolicyRule) {
        self.rules
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(rule.policy_id)
            .or_default()
            .push(rule);
    }
}

impl PolicyDirectory for InMemoryPolicyDirectory {
    fn policy(&self, id: PolicyId) -> Result<BenefitPolicy, ClaimError> {
        self.policies
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or_else(|| ClaimError::not_found("BenefitPolicy", id))
    }

    fn rules_for(&self, id: PolicyId) -> Result<Vec<BenefitPolicyRule>, ClaimError> {
        let rules = self.rules.read().unwrap_or_else(|e| e.into_inner());
        Ok(rules.get(&id).cloned().unwrap_or_default())
    }
}

/// Pre-approval registry backed by a per-member list
#[derive(Default)]
pub struct InMemoryPreApprovalDirectory {
    pre_approvals: RwLock<HashMap<MemberId, Vec<PreApproval>>>,
}

impl InMemoryPreApprovalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, pre_approval: PreApproval) {
        self.pre_approvals
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(pre_approval.member_id)
            .or_default()
            .push(pre_approval);
    }
}

impl PreApprovalDirectory for InMemoryPreApprovalDirectory {
    fn approved_for(&self, member_id: MemberId) -> Result<Vec<PreApproval>, ClaimError> {
        let pre_approvals = self.pre_approvals.read().unwrap_or_else(|e| e.into_inner());
        Ok(pre_approvals
            .get(&member_id)
            .map(|list| {
                list.iter()
                    .filter(|p| p.status == PreApprovalStatus::Approved)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
