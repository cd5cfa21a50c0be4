//! In-memory adapters
//!
//! Implements the claim-domain ports over `RwLock`-guarded maps. These back
//! the test suites and any embedded deployment; a database adapter would
//! implement the same traits.

pub mod directories;
pub mod store;

pub use directories::{InMemoryMemberDirectory, InMemoryPolicyDirectory, InMemoryPreApprovalDirectory};
pub use store::InMemoryClaimStore;
