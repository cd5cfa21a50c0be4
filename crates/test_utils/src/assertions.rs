//! Assertion helpers for domain types

use core_kernel::Money;
use domain_claims::{AuditRecord, ClaimStatus, FinancialSnapshot};

/// Asserts two money values match, with readable output on failure
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual, expected,
        "expected {} but got {}",
        expected, actual
    );
}

/// Asserts the exact decomposition `requested == copay + net`
pub fn assert_snapshot_identity(snapshot: &FinancialSnapshot) {
    let recomposed = snapshot
        .patient_copay
        .checked_add(&snapshot.net_provider_amount)
        .unwrap();
    assert_eq!(
        snapshot.requested_amount, recomposed,
        "copay {} + net {} != requested {}",
        snapshot.patient_copay, snapshot.net_provider_amount, snapshot.requested_amount
    );
}

/// Asserts an audit trail forms the given unbroken state path
pub fn assert_audit_path(trail: &[AuditRecord], path: &[(ClaimStatus, ClaimStatus)]) {
    let actual: Vec<_> = trail.iter().map(|a| (a.from_state, a.to_state)).collect();
    assert_eq!(actual, path, "audit trail diverged from expected path");

    for pair in trail.windows(2) {
        assert_eq!(
            pair[0].to_state, pair[1].from_state,
            "audit trail has a gap between records"
        );
    }
}
