//! Deterministic test fixtures

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};

/// Money amounts used across the suites
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// The standard annual limit used by fixture policies
    pub fn annual_limit() -> Money {
        Self::usd(dec!(10000))
    }

    /// The standard per-member limit used by fixture policies
    pub fn per_member_limit() -> Money {
        Self::usd(dec!(5000))
    }

    pub fn full_rate() -> Rate {
        Rate::full()
    }

    pub fn eighty_percent() -> Rate {
        Rate::from_percent(dec!(80)).unwrap()
    }

    pub fn half_rate() -> Rate {
        Rate::from_percent(dec!(50)).unwrap()
    }
}

/// Dates used across the suites; the fixture plan year is 2025
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn plan_year_start() -> NaiveDate {
        Self::date(2025, 1, 1)
    }

    pub fn plan_year_end() -> NaiveDate {
        Self::date(2025, 12, 31)
    }

    /// Enrollment well before any fixture service date
    pub fn enrollment() -> NaiveDate {
        Self::date(2025, 1, 1)
    }

    /// A service date in the middle of the plan year
    pub fn mid_year_service() -> NaiveDate {
        Self::date(2025, 6, 15)
    }
}
