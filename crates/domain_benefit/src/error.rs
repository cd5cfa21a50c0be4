//! Benefit domain errors

use chrono::NaiveDate;
use core_kernel::{MemberId, MoneyError, PolicyId, ServiceId, TemporalError};
use thiserror::Error;

/// Errors raised while constructing or mutating benefit entities
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenefitError {
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Policy limit {limit} is not in the policy currency {currency}")]
    LimitCurrencyMismatch { limit: String, currency: String },
}

/// Hard preconditions of coverage resolution
///
/// Each variant is terminal for the current call and carries what the caller
/// needs to display, including the date a condition will clear where one
/// exists. A service that is merely outside the policy's rules is not an
/// error; the resolver returns a not-covered decision for that case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Member {member} has no benefit policy assigned")]
    NoPolicyAssigned { member: MemberId },

    #[error("Policy {policy} is not effective on {on}")]
    PolicyNotEffective { policy: PolicyId, on: NaiveDate },

    #[error("Waiting period not elapsed; service is eligible from {eligible_on}")]
    WaitingPeriodNotElapsed { eligible_on: NaiveDate },

    #[error("Service {service} requires an approved pre-authorization")]
    PreApprovalRequired { service: ServiceId },
}
