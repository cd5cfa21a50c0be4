//! Enrolled members
//!
//! Demographic CRUD lives outside this core; the engine only needs the
//! enrollment date and the policy reference the member registry hands it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{EmployerId, MemberId, PolicyId};

/// A member enrolled (or about to be enrolled) with an employer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Employing organization
    pub employer_id: EmployerId,
    /// Date the member enrolled; waiting periods count from here
    pub enrollment_date: NaiveDate,
    /// Assigned benefit policy, `None` only transiently before enrollment
    pub policy_id: Option<PolicyId>,
}

impl Member {
    /// Creates a member not yet assigned to a policy
    pub fn new(employer_id: EmployerId, enrollment_date: NaiveDate) -> Self {
        Self {
            id: MemberId::new_v7(),
            employer_id,
            enrollment_date,
            policy_id: None,
        }
    }

    /// Assigns the member's benefit policy
    pub fn enrolled_in(mut self, policy_id: PolicyId) -> Self {
        self.policy_id = Some(policy_id);
        self
    }
}
