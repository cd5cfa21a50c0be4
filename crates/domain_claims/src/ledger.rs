//! Usage ledger
//!
//! The ledger is derived, never stored: limit consumption is the sum of
//! approved amounts across the relevant persisted claims, recomputed on
//! demand so it can never go stale. Consumption accrues when a claim is
//! approved; settlement records a payment reference and has no further
//! limit effect.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Currency, MemberId, Money, MoneyError};

use crate::claim::{Claim, ClaimStatus};

/// Consumed amounts per limit scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTotals {
    /// Consumed by the member within one calendar year of service
    pub annual: Money,
    /// Consumed by the member over the whole enrollment
    pub per_member: Money,
    /// Consumed across all members of the policy
    pub family: Money,
}

/// The amount a claim consumes from shared limits, if any
pub fn consumed_amount(claim: &Claim) -> Option<Money> {
    match claim.status {
        ClaimStatus::Approved | ClaimStatus::Settled => claim.approved_amount,
        _ => None,
    }
}

/// Sums consumption over the persisted claims of a policy's members
///
/// `claims` is the policy-wide claim set; the member scopes filter it down.
/// `exclude` drops the claim currently being evaluated so a breakdown of an
/// already-approved claim does not count itself.
pub fn usage_totals(
    claims: &[Claim],
    member_id: MemberId,
    year: i32,
    currency: Currency,
    exclude: Option<ClaimId>,
) -> Result<UsageTotals, MoneyError> {
    let mut annual = Money::zero(currency);
    let mut per_member = Money::zero(currency);
    let mut family = Money::zero(currency);

    for claim in claims {
        if Some(claim.id) == exclude {
            continue;
        }
        let Some(consumed) = consumed_amount(claim) else {
            continue;
        };
        family = family.checked_add(&consumed)?;
        if claim.member_id == member_id {
            per_member = per_member.checked_add(&consumed)?;
            if claim.service_date.year() == year {
                annual = annual.checked_add(&consumed)?;
            }
        }
    }

    Ok(UsageTotals {
        annual,
        per_member,
        family,
    })
}
