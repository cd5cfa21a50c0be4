//! Pre-approval (prior authorization) records
//!
//! Pre-approvals are issued by an external registry; the resolver only
//! consults them when a rule flags a service as requiring authorization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{EffectivePeriod, MemberId, PreApprovalId, ServiceId};

/// Status of a pre-authorization request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreApprovalStatus {
    Pending,
    Approved,
    Denied,
}

/// An authorization for one member to receive one service within a window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreApproval {
    pub id: PreApprovalId,
    pub member_id: MemberId,
    pub service_id: ServiceId,
    pub period: EffectivePeriod,
    pub status: PreApprovalStatus,
}

impl PreApproval {
    pub fn approved(
        member_id: MemberId,
        service_id: ServiceId,
        period: EffectivePeriod,
    ) -> Self {
        Self {
            id: PreApprovalId::new_v7(),
            member_id,
            service_id,
            period,
            status: PreApprovalStatus::Approved,
        }
    }

    /// True if this record authorizes the given member/service/date
    pub fn covers(&self, member_id: MemberId, service_id: ServiceId, date: NaiveDate) -> bool {
        self.status == PreApprovalStatus::Approved
            && self.member_id == member_id
            && self.service_id == service_id
            && self.period.contains(date)
    }
}
