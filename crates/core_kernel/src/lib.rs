//! Core Kernel - Foundational types for the group benefits engine
//!
//! This crate provides the building blocks shared by all domain modules:
//! - Money and Rate types with precise decimal arithmetic
//! - Effective-period types for benefit windows and waiting periods
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{
    ActorId, AuditRecordId, CategoryId, ClaimId, ClaimLineId, EmployerId, MemberId,
    PolicyId, PreApprovalId, RuleId, ServiceId,
};
pub use money::{Currency, Money, MoneyError, Rate};
pub use temporal::{EffectivePeriod, TemporalError};
