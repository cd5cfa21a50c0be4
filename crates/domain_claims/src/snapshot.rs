//! Financial snapshot calculation
//!
//! Turns a claim's requested amount plus its coverage decisions into the
//! patient-copay / payer-net split, clamped by whatever remains of the
//! policy's annual, per-member, and family limits. A clamp is a successful
//! outcome carrying its reason; the error cases are exhausted limits on
//! approval and a reviewer amount above the payable net.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_benefit::{BenefitPolicy, CoverageDecision};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::ledger::UsageTotals;

/// Which limit scope clamped the payer share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampReason {
    AnnualLimit,
    PerMemberLimit,
    FamilyLimit,
}

/// What remains of each limit scope before this claim, `None` for unlimited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingLimits {
    pub annual: Option<Money>,
    pub per_member: Option<Money>,
    pub family: Option<Money>,
}

/// The computed split of a claim's requested amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Sum of the claim's line totals
    pub requested_amount: Money,
    /// Covered amount before limit clamping
    pub raw_covered_amount: Money,
    /// What the payer owes after clamping
    pub net_provider_amount: Money,
    /// What the patient owes; requested minus net, exactly
    pub patient_copay: Money,
    /// Set when a limit reduced the payer share below the covered amount
    pub clamp: Option<ClampReason>,
    /// Remaining limit figures, for caller display
    pub remaining: RemainingLimits,
}

/// Computes the financial snapshot for a claim
///
/// `decisions` must hold one coverage decision per claim line, in line
/// order. Succeeds even when limits clamp the payer share to zero; the exact
/// identity `requested == copay + net` holds on every success.
pub fn compute_snapshot(
    claim: &Claim,
    decisions: &[CoverageDecision],
    policy: &BenefitPolicy,
    usage: &UsageTotals,
) -> Result<FinancialSnapshot, ClaimError> {
    if decisions.len() != claim.lines().len() {
        return Err(ClaimError::DecisionMismatch);
    }

    let zero = Money::zero(claim.currency);
    let requested = claim.requested_amount();

    let mut raw_covered = zero;
    for (line, decision) in claim.lines().iter().zip(decisions) {
        if !decision.covered {
            continue;
        }
        let mut covered = decision.rate.apply(&line.total());
        if let Some(cap) = &decision.applicable_limit {
            covered = covered.checked_min(cap)?;
        }
        raw_covered = raw_covered.checked_add(&covered)?;
    }

    let remaining = RemainingLimits {
        annual: remaining_in(policy.annual_limit, usage.annual)?,
        per_member: remaining_in(policy.per_member_limit, usage.per_member)?,
        family: remaining_in(policy.family_limit, usage.family)?,
    };

    let mut net = raw_covered;
    let mut clamp = None;
    for (reason, scope_remaining) in [
        (ClampReason::AnnualLimit, remaining.annual),
        (ClampReason::PerMemberLimit, remaining.per_member),
        (ClampReason::FamilyLimit, remaining.family),
    ] {
        if let Some(rem) = scope_remaining {
            if rem.amount() < net.amount() {
                net = net.checked_min(&rem)?;
                clamp = Some(reason);
            }
        }
    }
    let net = net.clamp_floor_zero();
    let copay = requested.checked_sub(&net)?;

    debug_assert_eq!(
        requested,
        copay.checked_add(&net).expect("same currency"),
        "requested amount must split exactly into copay and net"
    );

    Ok(FinancialSnapshot {
        requested_amount: requested,
        raw_covered_amount: raw_covered,
        net_provider_amount: net,
        patient_copay: copay,
        clamp,
        remaining,
    })
}

/// Validates a reviewer-entered approved amount against the snapshot
///
/// Nothing payable at all is `LimitExceeded`; a positive net with a larger
/// reviewer amount is `ApprovedAmountExceedsCoverage` carrying the ceiling.
pub fn validate_approved_amount(
    snapshot: &FinancialSnapshot,
    approved: Money,
) -> Result<(), ClaimError> {
    if snapshot.net_provider_amount.is_zero() && snapshot.raw_covered_amount.is_positive() {
        return Err(ClaimError::LimitExceeded {
            remaining: snapshot.remaining.clone(),
        });
    }
    let excess = approved.checked_sub(&snapshot.net_provider_amount)?;
    if excess.is_positive() {
        return Err(ClaimError::ApprovedAmountExceedsCoverage {
            approved,
            maximum: snapshot.net_provider_amount,
        });
    }
    Ok(())
}

fn remaining_in(
    limit: Option<Money>,
    consumed: Money,
) -> Result<Option<Money>, core_kernel::MoneyError> {
    limit
        .map(|l| l.checked_sub(&consumed).map(|m| m.clamp_floor_zero()))
        .transpose()
}
