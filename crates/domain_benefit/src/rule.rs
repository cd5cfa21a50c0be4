//! Per-policy coverage rules
//!
//! A rule narrows the policy's defaults for either one service category or
//! one specific service code. The scope is an enum, so a rule can never carry
//! both at once. At most one rule of each scope applies to a claim line, and
//! the specific-service rule always wins the tie.

use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, Money, PolicyId, Rate, RuleId, ServiceId};

/// What a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// A single service code
    Service(ServiceId),
    /// A whole service category
    Category(CategoryId),
}

/// A coverage override scoped to a service or a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitPolicyRule {
    pub id: RuleId,
    pub policy_id: PolicyId,
    pub scope: RuleScope,
    /// Coverage percentage override; falls back to the policy default
    pub coverage_rate: Option<Rate>,
    /// Cap on the covered amount of a single claim line
    pub fixed_limit: Option<Money>,
    /// Waiting-period override in days; falls back to the policy default
    pub waiting_days: Option<u32>,
    /// Whether an approved pre-authorization must exist before submission
    pub requires_pre_approval: bool,
}

impl BenefitPolicyRule {
    pub fn for_service(policy_id: PolicyId, service_id: ServiceId) -> Self {
        Self::new(policy_id, RuleScope::Service(service_id))
    }

    pub fn for_category(policy_id: PolicyId, category_id: CategoryId) -> Self {
        Self::new(policy_id, RuleScope::Category(category_id))
    }

    fn new(policy_id: PolicyId, scope: RuleScope) -> Self {
        Self {
            id: RuleId::new_v7(),
            policy_id,
            scope,
            coverage_rate: None,
            fixed_limit: None,
            waiting_days: None,
            requires_pre_approval: false,
        }
    }

    pub fn with_coverage_rate(mut self, rate: Rate) -> Self {
        self.coverage_rate = Some(rate);
        self
    }

    pub fn with_fixed_limit(mut self, limit: Money) -> Self {
        self.fixed_limit = Some(limit);
        self
    }

    pub fn with_waiting_days(mut self, days: u32) -> Self {
        self.waiting_days = Some(days);
        self
    }

    pub fn requiring_pre_approval(mut self) -> Self {
        self.requires_pre_approval = true;
        self
    }
}

/// Finds the rule governing a claim line, specific service first
///
/// The service-over-category tie-break is load-bearing: a 90% service rule
/// must win over a 50% category rule covering the same line.
pub fn applicable_rule<'a>(
    rules: &'a [BenefitPolicyRule],
    service_id: ServiceId,
    category_id: CategoryId,
) -> Option<&'a BenefitPolicyRule> {
    rules
        .iter()
        .find(|r| r.scope == RuleScope::Service(service_id))
        .or_else(|| {
            rules
                .iter()
                .find(|r| r.scope == RuleScope::Category(category_id))
        })
}
