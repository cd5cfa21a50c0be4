//! Effective-period handling for benefit windows
//!
//! Policy effectiveness and waiting-period eligibility are evaluated at date
//! granularity: a service happens on a date, a policy covers a window of
//! dates, both ends inclusive.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

/// An inclusive date window during which a policy (or pre-approval) is in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePeriod {
    /// First covered date (inclusive)
    pub start: NaiveDate,
    /// Last covered date (inclusive)
    pub end: NaiveDate,
}

impl EffectivePeriod {
    /// Creates a new period, rejecting a start after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if this period contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if this period overlaps with another
    pub fn overlaps(&self, other: &EffectivePeriod) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// First date on which a waiting period of `days` since `enrollment` is served
///
/// The boundary is inclusive: a service on exactly this date is eligible.
pub fn waiting_period_end(enrollment: NaiveDate, days: u32) -> NaiveDate {
    enrollment
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
