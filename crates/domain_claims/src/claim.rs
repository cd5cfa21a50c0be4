//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Currency, MemberId, Money};

use crate::error::ClaimError;
use crate::line::ClaimLine;

/// Claim lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Being assembled by the requester
    Draft,
    /// Handed to the payer's queue
    Submitted,
    /// A reviewer picked it up
    UnderReview,
    /// Approved for payment; limit consumption accrues here
    Approved,
    /// Rejected with a reviewer comment
    Rejected,
    /// Sent back to the requester for more information
    ReturnedForInfo,
    /// Payment reference recorded
    Settled,
}

impl ClaimStatus {
    /// Rejection and settlement end the lifecycle; nothing leaves them
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Settled)
    }
}

/// The unit of adjudication
///
/// Mutated only through state-machine transitions; the `version` field backs
/// the store's optimistic concurrency check, so two concurrent transition
/// attempts on one claim can never both commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-facing claim number
    pub claim_number: String,
    /// The member the services were rendered to
    pub member_id: MemberId,
    /// Date the services were rendered
    pub service_date: NaiveDate,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Currency of all amounts on this claim
    pub currency: Currency,
    /// Billed services; immutable once the claim leaves draft
    lines: Vec<ClaimLine>,
    /// Reviewer-entered amount, set only in Approved/Settled
    pub approved_amount: Option<Money>,
    /// Patient share of the requested amount, set on approval
    pub patient_copay: Option<Money>,
    /// Payer share of the requested amount, set on approval
    pub net_provider_amount: Option<Money>,
    /// Required for rejection and return-for-info
    pub reviewer_comment: Option<String>,
    /// Payment reference recorded at settlement
    pub settlement_reference: Option<String>,
    /// Optimistic concurrency token, bumped by the store on every commit
    pub version: u64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last transition
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new draft claim
    ///
    /// The claim's currency is pinned by its first line (or USD for an empty
    /// draft); every later line must match it.
    pub fn draft(
        member_id: MemberId,
        service_date: NaiveDate,
        lines: Vec<ClaimLine>,
    ) -> Result<Self, ClaimError> {
        let now = Utc::now();
        let currency = lines
            .first()
            .map(|l| l.unit_price.currency())
            .unwrap_or(Currency::USD);

        let mut claim = Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            member_id,
            service_date,
            status: ClaimStatus::Draft,
            currency,
            lines: Vec::new(),
            approved_amount: None,
            patient_copay: None,
            net_provider_amount: None,
            reviewer_comment: None,
            settlement_reference: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        for line in lines {
            claim.add_line(line)?;
        }
        Ok(claim)
    }

    /// Adds a line to a draft claim
    pub fn add_line(&mut self, line: ClaimLine) -> Result<(), ClaimError> {
        if self.status != ClaimStatus::Draft {
            return Err(ClaimError::LinesLocked);
        }
        // Single-currency claim: every line settles in the claim's currency
        if line.unit_price.currency() != self.currency {
            return Err(ClaimError::Money(core_kernel::MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                line.unit_price.currency().to_string(),
            )));
        }
        self.lines.push(line);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// The billed lines
    pub fn lines(&self) -> &[ClaimLine] {
        &self.lines
    }

    /// Sum of line totals
    pub fn requested_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, l| acc + l.total())
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CLM-{}", duration.as_nanos() % 10_000_000_000)
}
