//! Claim lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, ClaimLineId, Money, ServiceId};

/// One billed service within a claim
///
/// Lines are immutable once the claim leaves draft; the aggregate enforces
/// that, a line itself is a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLine {
    pub id: ClaimLineId,
    /// The billed service code
    pub service_id: ServiceId,
    /// The service's category, used for category-scoped rules
    pub category_id: CategoryId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl ClaimLine {
    pub fn new(
        service_id: ServiceId,
        category_id: CategoryId,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            id: ClaimLineId::new_v7(),
            service_id,
            category_id,
            quantity,
            unit_price,
        }
    }

    /// The line total: unit price times quantity
    pub fn total(&self) -> Money {
        self.unit_price.multiply(Decimal::from(self.quantity))
    }
}
