//! Coverage resolution pipeline
//!
//! Given a member, a claimed service, and a service date, walks the policy
//! model to a [`CoverageDecision`]. Each step is a hard precondition in a
//! fixed order; the waiting-period resolution here (rule override, else
//! policy default, else zero) is the single source of truth for waiting
//! periods in the whole engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{CategoryId, Money, Rate, ServiceId};

use crate::error::CoverageError;
use crate::member::Member;
use crate::policy::BenefitPolicy;
use crate::preapproval::PreApproval;
use crate::rule::{applicable_rule, BenefitPolicyRule, RuleScope};

/// Where a decision's coverage rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    ServiceRule,
    CategoryRule,
    PolicyDefault,
}

/// The resolved yes/no-and-percentage answer for one claim line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDecision {
    /// Whether any coverage applies to the line
    pub covered: bool,
    /// Payer share as a rate in [0, 1]; zero when not covered
    pub rate: Rate,
    /// Per-line cap on the covered amount, from the rule's fixed limit
    pub applicable_limit: Option<Money>,
    /// Provenance of the rate, for operational display
    pub source: Option<RateSource>,
}

impl CoverageDecision {
    /// The explicit not-covered decision: a success, not an error
    pub fn not_covered() -> Self {
        Self {
            covered: false,
            rate: Rate::zero(),
            applicable_limit: None,
            source: None,
        }
    }

    fn covered(rate: Rate, applicable_limit: Option<Money>, source: RateSource) -> Self {
        Self {
            covered: true,
            rate,
            applicable_limit,
            source: Some(source),
        }
    }
}

/// Resolves coverage for one claimed service on one date
///
/// Steps, in order, each a hard precondition:
/// 1. the member must have a policy assigned,
/// 2. the policy must be active with the service date inside its window,
/// 3. rule lookup: specific service, then category, then the policy default
///    rate; none of those means an explicit not-covered decision,
/// 4. the waiting period since enrollment must be served (the boundary date
///    itself is eligible),
/// 5. a rule flagged for pre-approval needs a matching approved authorization.
pub fn resolve_coverage(
    member: &Member,
    policy: &BenefitPolicy,
    rules: &[BenefitPolicyRule],
    service_id: ServiceId,
    category_id: CategoryId,
    service_date: NaiveDate,
    pre_approvals: &[PreApproval],
) -> Result<CoverageDecision, CoverageError> {
    let assigned = member
        .policy_id
        .ok_or(CoverageError::NoPolicyAssigned { member: member.id })?;

    if assigned != policy.id || !policy.is_effective_on(service_date) {
        return Err(CoverageError::PolicyNotEffective {
            policy: assigned,
            on: service_date,
        });
    }

    let rule = applicable_rule(rules, service_id, category_id);
    let decision = match rule {
        Some(rule) => {
            let rate = rule
                .coverage_rate
                .or(policy.default_coverage_rate)
                .unwrap_or_else(Rate::zero);
            let source = match rule.scope {
                RuleScope::Service(_) => RateSource::ServiceRule,
                RuleScope::Category(_) => RateSource::CategoryRule,
            };
            CoverageDecision::covered(rate, rule.fixed_limit, source)
        }
        None => match policy.default_coverage_rate {
            Some(rate) => CoverageDecision::covered(rate, None, RateSource::PolicyDefault),
            // Outside the policy's rules entirely: an explicit decision,
            // with no waiting period or authorization left to check.
            None => {
                debug!(policy = %policy.id, service = %service_id, "service not covered");
                return Ok(CoverageDecision::not_covered());
            }
        },
    };

    let waiting_days = rule
        .and_then(|r| r.waiting_days)
        .unwrap_or(policy.default_waiting_days);
    let eligible_on = core_kernel::temporal::waiting_period_end(member.enrollment_date, waiting_days);
    if service_date < eligible_on {
        return Err(CoverageError::WaitingPeriodNotElapsed { eligible_on });
    }

    if rule.is_some_and(|r| r.requires_pre_approval) {
        let authorized = pre_approvals
            .iter()
            .any(|p| p.covers(member.id, service_id, service_date));
        if !authorized {
            return Err(CoverageError::PreApprovalRequired {
                service: service_id,
            });
        }
    }

    Ok(decision)
}
