//! End-to-end engine tests over the in-memory adapters
//!
//! These drive the claim service exactly as a transport layer would: seed
//! policies and members, create claims, and walk them through the lifecycle.

use std::sync::Barrier;

use rust_decimal_macros::dec;

use core_kernel::{CategoryId, EmployerId, ServiceId};
use domain_benefit::{BenefitPolicy, BenefitPolicyRule, CoverageError, PreApproval};
use domain_claims::{
    required_capability, ClaimError, ClaimStatus, ClampReason, QueueFilter, TransitionPayload,
};
use test_utils::{
    assert_audit_path, assert_money_eq, assert_snapshot_identity, EngineFixture, MoneyFixtures,
    TemporalFixtures,
};

mod lifecycle {
    use super::*;

    #[test]
    fn test_full_lifecycle_draft_to_settled() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let claim_id = fixture.draft_claim(&member, dec!(1000)).unwrap();
        fixture.submit(claim_id).unwrap();
        fixture.start_review(claim_id).unwrap();

        // 80% default rate, well inside limits
        let approved = fixture.approve(claim_id, MoneyFixtures::usd(dec!(800))).unwrap();
        assert_eq!(approved.status, ClaimStatus::Approved);
        assert_eq!(approved.net_provider_amount, Some(MoneyFixtures::usd(dec!(800))));
        assert_eq!(approved.patient_copay, Some(MoneyFixtures::usd(dec!(200))));

        let settled = fixture.settle(claim_id, "PAY-2025-0001").unwrap();
        assert_eq!(settled.status, ClaimStatus::Settled);

        let trail = fixture.service.audit_trail(claim_id).unwrap();
        assert_audit_path(
            &trail,
            &[
                (ClaimStatus::Draft, ClaimStatus::Submitted),
                (ClaimStatus::Submitted, ClaimStatus::UnderReview),
                (ClaimStatus::UnderReview, ClaimStatus::Approved),
                (ClaimStatus::Approved, ClaimStatus::Settled),
            ],
        );
        // No audit record exists for a pair outside the transition table
        assert!(trail
            .iter()
            .all(|a| required_capability(a.from_state, a.to_state).is_some()));
    }

    #[test]
    fn test_version_advances_on_every_transition() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let claim_id = fixture.draft_claim(&member, dec!(100)).unwrap();
        let submitted = fixture.submit(claim_id).unwrap();
        let reviewed = fixture.start_review(claim_id).unwrap();

        assert_eq!(submitted.version, 2);
        assert_eq!(reviewed.version, 3);
    }

    #[test]
    fn test_returned_claim_resubmits_without_re_resolution() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let claim_id = fixture.claim_under_review(&member, dec!(300)).unwrap();
        fixture
            .service
            .transition(
                claim_id,
                ClaimStatus::ReturnedForInfo,
                &fixture.reviewer,
                TransitionPayload::comment("Need the invoice"),
            )
            .unwrap();

        let resubmitted = fixture.submit(claim_id).unwrap();
        assert_eq!(resubmitted.status, ClaimStatus::Submitted);
    }
}

mod coverage_gates {
    use super::*;

    #[test]
    fn test_submit_without_policy_assignment() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let mut member = fixture.enroll(&policy);
        member.policy_id = None;
        fixture.members.upsert(member.clone());

        let claim_id = fixture.draft_claim(&member, dec!(100)).unwrap();
        let result = fixture.submit(claim_id);
        assert!(matches!(
            result,
            Err(ClaimError::Coverage(CoverageError::NoPolicyAssigned { .. }))
        ));
    }

    #[test]
    fn test_submit_outside_policy_window() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        // Policy covers 2025 only
        let claim_id = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::date(2026, 2, 1),
                vec![fixture.line(ServiceId::new(), CategoryId::new(), dec!(100))],
            )
            .unwrap();
        let result = fixture.submit(claim_id);
        assert!(matches!(
            result,
            Err(ClaimError::Coverage(CoverageError::PolicyNotEffective { .. }))
        ));
    }

    #[test]
    fn test_waiting_period_boundary_is_inclusive() {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .default_coverage_rate(MoneyFixtures::full_rate())
            .default_waiting_days(30)
            .build()
            .unwrap(),
        );
        // Enrolled 2025-01-01, 30 waiting days: eligible on 2025-01-31
        let member = fixture.enroll(&policy);

        let too_early = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::date(2025, 1, 30),
                vec![fixture.line(ServiceId::new(), CategoryId::new(), dec!(100))],
            )
            .unwrap();
        let result = fixture.submit(too_early);
        match result {
            Err(ClaimError::Coverage(CoverageError::WaitingPeriodNotElapsed { eligible_on })) => {
                assert_eq!(eligible_on, TemporalFixtures::date(2025, 1, 31));
            }
            other => panic!("expected WaitingPeriodNotElapsed, got {:?}", other.map(|s| s.status)),
        }

        let on_boundary = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::date(2025, 1, 31),
                vec![fixture.line(ServiceId::new(), CategoryId::new(), dec!(100))],
            )
            .unwrap();
        fixture.submit(on_boundary).unwrap();
    }

    #[test]
    fn test_pre_approval_gate() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);
        let service_id = ServiceId::new();

        fixture.seed_rule(
            BenefitPolicyRule::for_service(policy.id, service_id)
                .with_coverage_rate(MoneyFixtures::full_rate())
                .requiring_pre_approval(),
        );

        let claim_id = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::mid_year_service(),
                vec![fixture.line(service_id, CategoryId::new(), dec!(100))],
            )
            .unwrap();
        let result = fixture.submit(claim_id);
        assert!(matches!(
            result,
            Err(ClaimError::Coverage(CoverageError::PreApprovalRequired { .. }))
        ));

        // An approved authorization covering the service date clears the gate
        fixture.seed_pre_approval(PreApproval::approved(
            member.id,
            service_id,
            policy.period,
        ));
        fixture.submit(claim_id).unwrap();
    }

    #[test]
    fn test_uncovered_service_is_a_decision_not_an_error() {
        let fixture = EngineFixture::new();
        // No default rate, no rules: nothing is covered
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .build()
            .unwrap(),
        );
        let member = fixture.enroll(&policy);

        let claim_id = fixture.draft_claim(&member, dec!(500)).unwrap();
        fixture.submit(claim_id).unwrap();

        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert!(breakdown.raw_covered_amount.is_zero());
        assert!(breakdown.net_provider_amount.is_zero());
        assert_money_eq(breakdown.patient_copay, MoneyFixtures::usd(dec!(500)));
        assert_snapshot_identity(&breakdown);
    }
}

mod scenario_a_annual_limit_clamp {
    use super::*;

    fn fixture_with_consumed_9500() -> (EngineFixture, domain_benefit::Member) {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .currency(core_kernel::Currency::USD)
            .annual_limit(MoneyFixtures::usd(dec!(10000)))
            .default_coverage_rate(MoneyFixtures::full_rate())
            .build()
            .unwrap(),
        );
        let member = fixture.enroll(&policy);
        fixture
            .approved_claim(&member, dec!(9500), MoneyFixtures::usd(dec!(9500)))
            .unwrap();
        (fixture, member)
    }

    #[test]
    fn test_clamped_breakdown() {
        let (fixture, member) = fixture_with_consumed_9500();

        // 1000 requested, fully covered, but only 500 of the limit remains
        let claim_id = fixture.claim_under_review(&member, dec!(1000)).unwrap();
        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();

        assert_money_eq(breakdown.raw_covered_amount, MoneyFixtures::usd(dec!(1000)));
        assert_money_eq(breakdown.net_provider_amount, MoneyFixtures::usd(dec!(500)));
        assert_money_eq(breakdown.patient_copay, MoneyFixtures::usd(dec!(500)));
        assert_eq!(breakdown.clamp, Some(ClampReason::AnnualLimit));
        assert_eq!(breakdown.remaining.annual, Some(MoneyFixtures::usd(dec!(500))));
        assert_snapshot_identity(&breakdown);
    }

    #[test]
    fn test_approval_above_payable_net_fails() {
        let (fixture, member) = fixture_with_consumed_9500();
        let claim_id = fixture.claim_under_review(&member, dec!(1000)).unwrap();

        let result = fixture.approve(claim_id, MoneyFixtures::usd(dec!(1000)));
        match result {
            Err(ClaimError::ApprovedAmountExceedsCoverage { approved, maximum }) => {
                assert_money_eq(approved, MoneyFixtures::usd(dec!(1000)));
                assert_money_eq(maximum, MoneyFixtures::usd(dec!(500)));
            }
            other => panic!("expected ApprovedAmountExceedsCoverage, got {:?}", other.map(|s| s.status)),
        }

        // The failed attempt must not have moved the claim
        let approved = fixture.approve(claim_id, MoneyFixtures::usd(dec!(500))).unwrap();
        assert_eq!(approved.approved_amount, Some(MoneyFixtures::usd(dec!(500))));
        assert_eq!(approved.patient_copay, Some(MoneyFixtures::usd(dec!(500))));
    }

    #[test]
    fn test_exhausted_limit_blocks_approval_entirely() {
        let (fixture, member) = fixture_with_consumed_9500();
        // Consume the final 500
        fixture
            .approved_claim(&member, dec!(500), MoneyFixtures::usd(dec!(500)))
            .unwrap();

        let claim_id = fixture.claim_under_review(&member, dec!(200)).unwrap();
        let result = fixture.approve(claim_id, MoneyFixtures::usd(dec!(200)));
        match result {
            Err(ClaimError::LimitExceeded { remaining }) => {
                assert_eq!(remaining.annual, Some(MoneyFixtures::usd(dec!(0))));
            }
            other => panic!("expected LimitExceeded, got {:?}", other.map(|s| s.status)),
        }
    }
}

mod scenario_b_rule_precedence {
    use super::*;

    #[test]
    fn test_service_rule_beats_category_rule() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let service_id = ServiceId::new();
        let category_id = CategoryId::new();
        fixture.seed_rule(
            BenefitPolicyRule::for_category(policy.id, category_id)
                .with_coverage_rate(MoneyFixtures::half_rate()),
        );
        fixture.seed_rule(
            BenefitPolicyRule::for_service(policy.id, service_id)
                .with_coverage_rate(core_kernel::Rate::from_percent(dec!(90)).unwrap()),
        );

        let claim_id = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::mid_year_service(),
                vec![fixture.line(service_id, category_id, dec!(1000))],
            )
            .unwrap();
        fixture.submit(claim_id).unwrap();

        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(breakdown.raw_covered_amount, MoneyFixtures::usd(dec!(900)));
        assert_money_eq(breakdown.patient_copay, MoneyFixtures::usd(dec!(100)));
    }

    #[test]
    fn test_rule_fixed_limit_caps_a_line() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let service_id = ServiceId::new();
        fixture.seed_rule(
            BenefitPolicyRule::for_service(policy.id, service_id)
                .with_coverage_rate(MoneyFixtures::full_rate())
                .with_fixed_limit(MoneyFixtures::usd(dec!(250))),
        );

        let claim_id = fixture
            .service
            .create_claim(
                member.id,
                TemporalFixtures::mid_year_service(),
                vec![fixture.line(service_id, CategoryId::new(), dec!(1000))],
            )
            .unwrap();
        fixture.submit(claim_id).unwrap();

        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(breakdown.raw_covered_amount, MoneyFixtures::usd(dec!(250)));
    }
}

mod scenario_c_rejection {
    use super::*;

    #[test]
    fn test_blank_comment_blocks_rejection_then_terminal() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);
        let claim_id = fixture.claim_under_review(&member, dec!(400)).unwrap();

        let blank = fixture.service.transition(
            claim_id,
            ClaimStatus::Rejected,
            &fixture.reviewer,
            TransitionPayload::comment("   "),
        );
        assert!(matches!(blank, Err(ClaimError::CommentRequired)));

        let rejected = fixture
            .service
            .transition(
                claim_id,
                ClaimStatus::Rejected,
                &fixture.reviewer,
                TransitionPayload::comment("Duplicate of CLM-1042"),
            )
            .unwrap();
        assert_eq!(rejected.status, ClaimStatus::Rejected);

        for target in [
            ClaimStatus::Submitted,
            ClaimStatus::UnderReview,
            ClaimStatus::Approved,
            ClaimStatus::Settled,
        ] {
            let result = fixture.service.transition(
                claim_id,
                target,
                &fixture.reviewer,
                TransitionPayload::default(),
            );
            assert!(matches!(
                result,
                Err(ClaimError::IllegalStateTransition { .. })
            ));
        }

        // The rejection comment travels with the audit record
        let trail = fixture.service.audit_trail(claim_id).unwrap();
        let last = trail.last().unwrap();
        assert_eq!(last.to_state, ClaimStatus::Rejected);
        assert_eq!(last.comment.as_deref(), Some("Duplicate of CLM-1042"));
    }
}

mod scenario_d_concurrency {
    use super::*;

    #[test]
    fn test_concurrent_approvals_one_winner() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);
        let claim_id = fixture.claim_under_review(&member, dec!(1000)).unwrap();

        let barrier = Barrier::new(2);
        let (a, b) = std::thread::scope(|scope| {
            let ta = scope.spawn(|| {
                barrier.wait();
                fixture.approve(claim_id, MoneyFixtures::usd(dec!(800)))
            });
            let tb = scope.spawn(|| {
                barrier.wait();
                fixture.approve(claim_id, MoneyFixtures::usd(dec!(800)))
            });
            (ta.join().unwrap(), tb.join().unwrap())
        });

        let (winner, loser) = match (a, b) {
            (Ok(w), Err(l)) | (Err(l), Ok(w)) => (w, l),
            (Ok(_), Ok(_)) => panic!("both approvals committed"),
            (Err(a), Err(b)) => panic!("no approval committed: {a}, {b}"),
        };
        assert_eq!(winner.status, ClaimStatus::Approved);
        // The loser either lost the version race or read the already
        // approved claim, depending on interleaving
        assert!(matches!(
            loser,
            ClaimError::ConcurrentModification { .. }
                | ClaimError::IllegalStateTransition { .. }
        ));

        // Exactly one approval audit record exists either way
        let trail = fixture.service.audit_trail(claim_id).unwrap();
        let approvals = trail
            .iter()
            .filter(|r| r.to_state == ClaimStatus::Approved)
            .count();
        assert_eq!(approvals, 1);
    }

    #[test]
    fn test_stale_writer_gets_concurrent_modification() {
        use core_kernel::ActorId;
        use domain_claims::{AuditRecord, ClaimStore};

        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);
        let claim_id = fixture.draft_claim(&member, dec!(100)).unwrap();

        // Both writers read version 1; only the first commit lands
        let claim = fixture.store.get(claim_id).unwrap();
        let audit = |to| AuditRecord::new(claim_id, ActorId::new(), ClaimStatus::Draft, to, None);

        fixture
            .store
            .commit(claim.clone(), 1, audit(ClaimStatus::Submitted), None)
            .unwrap();
        let result = fixture
            .store
            .commit(claim, 1, audit(ClaimStatus::Submitted), None);
        assert!(matches!(
            result,
            Err(ClaimError::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn test_sequential_approvals_share_one_limit() {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .annual_limit(MoneyFixtures::usd(dec!(1000)))
            .default_coverage_rate(MoneyFixtures::full_rate())
            .build()
            .unwrap(),
        );
        let member = fixture.enroll(&policy);

        let first = fixture.claim_under_review(&member, dec!(600)).unwrap();
        let second = fixture.claim_under_review(&member, dec!(600)).unwrap();

        fixture.approve(first, MoneyFixtures::usd(dec!(600))).unwrap();

        // Only 400 of the shared limit remains for the second claim
        let result = fixture.approve(second, MoneyFixtures::usd(dec!(600)));
        assert!(matches!(
            result,
            Err(ClaimError::ApprovedAmountExceedsCoverage { .. })
        ));
        fixture.approve(second, MoneyFixtures::usd(dec!(400))).unwrap();
    }
}

mod limits_across_members {
    use super::*;

    #[test]
    fn test_family_limit_spans_members() {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .family_limit(MoneyFixtures::usd(dec!(6000)))
            .default_coverage_rate(MoneyFixtures::full_rate())
            .build()
            .unwrap(),
        );
        let alice = fixture.enroll(&policy);
        let bob = fixture.enroll(&policy);

        fixture
            .approved_claim(&alice, dec!(4000), MoneyFixtures::usd(dec!(4000)))
            .unwrap();

        // Bob's claim is clamped by what the family has left
        let claim_id = fixture.claim_under_review(&bob, dec!(3000)).unwrap();
        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(breakdown.net_provider_amount, MoneyFixtures::usd(dec!(2000)));
        assert_eq!(breakdown.clamp, Some(ClampReason::FamilyLimit));
    }

    #[test]
    fn test_per_member_limit_does_not_span_members() {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .per_member_limit(MoneyFixtures::usd(dec!(5000)))
            .default_coverage_rate(MoneyFixtures::full_rate())
            .build()
            .unwrap(),
        );
        let alice = fixture.enroll(&policy);
        let bob = fixture.enroll(&policy);

        fixture
            .approved_claim(&alice, dec!(5000), MoneyFixtures::usd(dec!(5000)))
            .unwrap();

        // Alice exhausted her own cap; Bob's is untouched
        let claim_id = fixture.claim_under_review(&bob, dec!(3000)).unwrap();
        let breakdown = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(breakdown.net_provider_amount, MoneyFixtures::usd(dec!(3000)));
        assert_eq!(breakdown.clamp, None);
    }
}

mod breakdown {
    use super::*;

    #[test]
    fn test_breakdown_is_idempotent_for_approved_claims() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let claim_id = fixture
            .approved_claim(&member, dec!(1000), MoneyFixtures::usd(dec!(800)))
            .unwrap();

        let first = fixture.service.get_cost_breakdown(claim_id).unwrap();
        let second = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_eq!(first, second);
        assert_snapshot_identity(&first);
    }

    #[test]
    fn test_breakdown_reflects_other_claims_consumption() {
        let fixture = EngineFixture::new();
        let policy = fixture.seed_policy(
            BenefitPolicy::builder(
                EmployerId::new(),
                TemporalFixtures::plan_year_start(),
                TemporalFixtures::plan_year_end(),
            )
            .annual_limit(MoneyFixtures::usd(dec!(2000)))
            .default_coverage_rate(MoneyFixtures::full_rate())
            .build()
            .unwrap(),
        );
        let member = fixture.enroll(&policy);

        let claim_id = fixture.draft_claim(&member, dec!(1500)).unwrap();
        fixture.submit(claim_id).unwrap();

        let before = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(before.net_provider_amount, MoneyFixtures::usd(dec!(1500)));

        // Another approved claim consumes most of the limit
        fixture
            .approved_claim(&member, dec!(1800), MoneyFixtures::usd(dec!(1800)))
            .unwrap();

        let after = fixture.service.get_cost_breakdown(claim_id).unwrap();
        assert_money_eq(after.net_provider_amount, MoneyFixtures::usd(dec!(200)));
        assert_eq!(after.clamp, Some(ClampReason::AnnualLimit));
    }
}

mod queues {
    use super::*;

    #[test]
    fn test_pending_and_approved_queues() {
        let fixture = EngineFixture::new();
        let policy = fixture.default_policy();
        let member = fixture.enroll(&policy);

        let draft = fixture.draft_claim(&member, dec!(100)).unwrap();
        let submitted = fixture.draft_claim(&member, dec!(200)).unwrap();
        fixture.submit(submitted).unwrap();
        let reviewing = fixture.claim_under_review(&member, dec!(300)).unwrap();
        let approved = fixture
            .approved_claim(&member, dec!(400), MoneyFixtures::usd(dec!(320)))
            .unwrap();

        let pending = fixture.service.list_pending(&QueueFilter::all()).unwrap();
        let pending_ids: Vec<_> = pending.iter().map(|c| c.id).collect();
        assert_eq!(pending.len(), 2);
        assert!(pending_ids.contains(&submitted));
        assert!(pending_ids.contains(&reviewing));
        assert!(!pending_ids.contains(&draft));

        let approved_queue = fixture.service.list_approved(&QueueFilter::all()).unwrap();
        assert_eq!(approved_queue.len(), 1);
        assert_eq!(approved_queue[0].id, approved);
    }

    #[test]
    fn test_queue_filters_by_member_and_employer() {
        let fixture = EngineFixture::new();
        let policy_a = fixture.default_policy();
        let policy_b = fixture.default_policy();
        let alice = fixture.enroll(&policy_a);
        let bob = fixture.enroll(&policy_b);

        let alices = fixture.draft_claim(&alice, dec!(100)).unwrap();
        fixture.submit(alices).unwrap();
        let bobs = fixture.draft_claim(&bob, dec!(200)).unwrap();
        fixture.submit(bobs).unwrap();

        let by_member = fixture
            .service
            .list_pending(&QueueFilter::for_member(alice.id))
            .unwrap();
        assert_eq!(by_member.len(), 1);
        assert_eq!(by_member[0].id, alices);

        let by_employer = fixture
            .service
            .list_pending(&QueueFilter::for_employer(policy_b.employer_id))
            .unwrap();
        assert_eq!(by_employer.len(), 1);
        assert_eq!(by_employer[0].id, bobs);
    }
}
