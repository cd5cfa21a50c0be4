//! Benefit Policy Domain
//!
//! This crate implements the benefit policy model and the coverage resolver:
//! per-employer policies with per-category and per-service coverage rules,
//! member enrollment, pre-approval lookups, and the ordered pipeline that
//! decides whether a claimed service is covered on a given date.
//!
//! # Resolution order
//!
//! ```text
//! policy assigned -> policy effective -> rule lookup (service beats category)
//!   -> waiting period served -> pre-approval present -> decision
//! ```
//!
//! Hard preconditions fail with a [`CoverageError`]; a service simply outside
//! the policy's rules is an explicit not-covered decision, not an error.

pub mod error;
pub mod member;
pub mod policy;
pub mod preapproval;
pub mod resolver;
pub mod rule;

pub use error::{BenefitError, CoverageError};
pub use member::Member;
pub use policy::{BenefitPolicy, BenefitPolicyBuilder, PolicyStatus};
pub use preapproval::{PreApproval, PreApprovalStatus};
pub use resolver::{resolve_coverage, CoverageDecision, RateSource};
pub use rule::{applicable_rule, BenefitPolicyRule, RuleScope};
