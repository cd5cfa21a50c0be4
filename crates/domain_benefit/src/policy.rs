//! Benefit policy aggregate
//!
//! One policy exists per employer enrollment period. Policies are immutable
//! per version; administration (activation, renewal) happens outside this
//! core, which only ever evaluates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, EffectivePeriod, EmployerId, Money, PolicyId, Rate};

use crate::error::BenefitError;

/// Policy lifecycle status
///
/// Only `Active` policies produce coverage decisions. The other states exist
/// so the engine can report precisely why a policy is not effective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Draft,
    Active,
    Expired,
    Cancelled,
}

/// The coverage contract for an employer's enrolled members for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitPolicy {
    /// Unique identifier
    pub id: PolicyId,
    /// Owning employer
    pub employer_id: EmployerId,
    /// Effective window, both ends inclusive
    pub period: EffectivePeriod,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Currency all limits and claims under this policy are expressed in
    pub currency: Currency,
    /// Total payable per member per calendar year, `None` for unlimited
    pub annual_limit: Option<Money>,
    /// Total payable per member over the enrollment, unbounded in time
    pub per_member_limit: Option<Money>,
    /// Total payable across all members enrolled in this policy
    pub family_limit: Option<Money>,
    /// Coverage applied when no rule matches a claimed service
    pub default_coverage_rate: Option<Rate>,
    /// Waiting period applied when the matching rule has no override
    pub default_waiting_days: u32,
}

impl BenefitPolicy {
    /// Returns true if coverage decisions may proceed on the given date
    ///
    /// Both conditions of the policy invariant: status must be `Active` and
    /// the evaluation date must fall within the effective window.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.status == PolicyStatus::Active && self.period.contains(date)
    }

    /// Builder with the policy's required fields
    pub fn builder(employer_id: EmployerId, start: NaiveDate, end: NaiveDate) -> BenefitPolicyBuilder {
        BenefitPolicyBuilder::new(employer_id, start, end)
    }
}

/// Builder for [`BenefitPolicy`]
///
/// Validates the effective window and limit currencies at `build`.
#[derive(Debug, Clone)]
pub struct BenefitPolicyBuilder {
    employer_id: EmployerId,
    start: NaiveDate,
    end: NaiveDate,
    status: PolicyStatus,
    currency: Currency,
    annual_limit: Option<Money>,
    per_member_limit: Option<Money>,
    family_limit: Option<Money>,
    default_coverage_rate: Option<Rate>,
    default_waiting_days: u32,
}

impl BenefitPolicyBuilder {
    pub fn new(employer_id: EmployerId, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            employer_id,
            start,
            end,
            status: PolicyStatus::Active,
            currency: Currency::USD,
            annual_limit: None,
            per_member_limit: None,
            family_limit: None,
            default_coverage_rate: None,
            default_waiting_days: 0,
        }
    }

    pub fn status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn annual_limit(mut self, limit: Money) -> Self {
        self.annual_limit = Some(limit);
        self
    }

    pub fn per_member_limit(mut self, limit: Money) -> Self {
        self.per_member_limit = Some(limit);
        self
    }

    pub fn family_limit(mut self, limit: Money) -> Self {
        self.family_limit = Some(limit);
        self
    }

    pub fn default_coverage_rate(mut self, rate: Rate) -> Self {
        self.default_coverage_rate = Some(rate);
        self
    }

    pub fn default_waiting_days(mut self, days: u32) -> Self {
        self.default_waiting_days = days;
        self
    }

    pub fn build(self) -> Result<BenefitPolicy, BenefitError> {
        let period = EffectivePeriod::new(self.start, self.end)?;

        for limit in [&self.annual_limit, &self.per_member_limit, &self.family_limit]
            .into_iter()
            .flatten()
        {
            if limit.currency() != self.currency {
                return Err(BenefitError::LimitCurrencyMismatch {
                    limit: limit.to_string(),
                    currency: self.currency.to_string(),
                });
            }
        }

        Ok(BenefitPolicy {
            id: PolicyId::new_v7(),
            employer_id: self.employer_id,
            period,
            status: self.status,
            currency: self.currency,
            annual_limit: self.annual_limit,
            per_member_limit: self.per_member_limit,
            family_limit: self.family_limit,
            default_coverage_rate: self.default_coverage_rate,
            default_waiting_days: self.default_waiting_days,
        })
    }
}
