//! Purchase flow tests.
//!
//! Covers the full validate → settle flow with recording collaborator
//! doubles: rule rejections leave no side effects, successful purchases
//! invoke payment then reservation exactly once each, and collaborator
//! failures propagate unchanged.
//!
//! Run with: `cargo test --test purchase_flow_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use boxoffice_core::{
    AccountId, Money, PaymentGatewayError, PricingPolicy, PurchaseError, PurchaseValidator,
    SeatReservationError, TicketRequest, TicketType,
};
use boxoffice_testing::mocks::{
    FailingPaymentGateway, FailingSeatReservation, RecordingPaymentGateway,
    RecordingSeatReservation,
};
use std::sync::Arc;

struct Harness {
    validator: PurchaseValidator,
    payments: Arc<RecordingPaymentGateway>,
    reservations: Arc<RecordingSeatReservation>,
}

fn harness() -> Harness {
    boxoffice_testing::init_test_tracing();
    let payments = Arc::new(RecordingPaymentGateway::new());
    let reservations = Arc::new(RecordingSeatReservation::new());
    let validator = PurchaseValidator::new(
        PricingPolicy::default(),
        payments.clone(),
        reservations.clone(),
    );
    Harness {
        validator,
        payments,
        reservations,
    }
}

fn request(ticket_type: TicketType, count: u32) -> TicketRequest {
    TicketRequest::new(ticket_type, count).unwrap()
}

#[test]
fn successful_purchase_settles_payment_then_seats() {
    let h = harness();

    let summary = h
        .validator
        .purchase(
            1,
            &[
                request(TicketType::Adult, 10),
                request(TicketType::Child, 5),
                request(TicketType::Infant, 5),
            ],
        )
        .expect("purchase should succeed");

    assert_eq!(summary.total_tickets, 20);
    assert_eq!(summary.total_amount, Money::from_dollars(250));
    assert_eq!(summary.total_seats, 15);
    assert_eq!(summary.total_adult_tickets, 10);
    assert_eq!(summary.total_child_tickets, 5);
    assert_eq!(summary.total_infant_tickets, 5);

    let account = AccountId::new(1).unwrap();
    assert_eq!(h.payments.calls(), vec![(account, Money::from_dollars(250))]);
    assert_eq!(h.reservations.calls(), vec![(account, 15)]);
}

#[test]
fn invalid_account_rejects_before_any_side_effect() {
    let h = harness();

    for account_id in [0, -1, i64::MIN] {
        let err = h
            .validator
            .purchase(account_id, &[request(TicketType::Adult, 1)])
            .unwrap_err();
        assert!(matches!(err, PurchaseError::InvalidAccount));
    }

    // Invalid account wins regardless of the requests.
    assert!(matches!(
        h.validator.purchase(0, &[]).unwrap_err(),
        PurchaseError::InvalidAccount
    ));

    assert!(h.payments.calls().is_empty());
    assert!(h.reservations.calls().is_empty());
}

#[test]
fn unaccompanied_minor_rejects_child_only_purchase() {
    let h = harness();

    let err = h
        .validator
        .purchase(1, &[request(TicketType::Child, 1)])
        .unwrap_err();
    assert!(matches!(err, PurchaseError::UnaccompaniedMinor));
    assert!(h.payments.calls().is_empty());
    assert!(h.reservations.calls().is_empty());
}

#[test]
fn unaccompanied_minor_rejects_child_and_infant_mix() {
    let h = harness();

    let err = h
        .validator
        .purchase(
            1,
            &[
                request(TicketType::Child, 10),
                request(TicketType::Infant, 10),
            ],
        )
        .unwrap_err();
    assert!(matches!(err, PurchaseError::UnaccompaniedMinor));
    assert!(h.payments.calls().is_empty());
}

#[test]
fn too_many_tickets_rejects_aggregate_over_the_limit() {
    let h = harness();

    let err = h
        .validator
        .purchase(
            1,
            &[
                request(TicketType::Adult, 10),
                request(TicketType::Child, 10),
                request(TicketType::Infant, 10),
            ],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        PurchaseError::TooManyTickets {
            requested: 30,
            max: 20
        }
    ));
    assert!(h.payments.calls().is_empty());
    assert!(h.reservations.calls().is_empty());
}

#[test]
fn payment_failure_propagates_and_skips_reservation() {
    boxoffice_testing::init_test_tracing();
    let reservations = Arc::new(RecordingSeatReservation::new());
    let validator = PurchaseValidator::new(
        PricingPolicy::default(),
        Arc::new(FailingPaymentGateway::new(PaymentGatewayError::Declined {
            reason: "expired card".to_string(),
        })),
        reservations.clone(),
    );

    let err = validator
        .purchase(1, &[request(TicketType::Adult, 2)])
        .unwrap_err();

    assert_eq!(err.to_string(), "card declined: expired card");
    assert!(matches!(err, PurchaseError::Payment(_)));
    assert!(!err.is_validation());
    // Failure stops the sequence: seats are never reserved.
    assert!(reservations.calls().is_empty());
}

#[test]
fn reservation_failure_propagates_after_payment_was_made() {
    boxoffice_testing::init_test_tracing();
    let payments = Arc::new(RecordingPaymentGateway::new());
    let validator = PurchaseValidator::new(
        PricingPolicy::default(),
        payments.clone(),
        Arc::new(FailingSeatReservation::new(SeatReservationError::SoldOut {
            requested: 2,
            available: 0,
        })),
    );

    let err = validator
        .purchase(1, &[request(TicketType::Adult, 2)])
        .unwrap_err();

    assert!(matches!(err, PurchaseError::SeatReservation(_)));
    assert_eq!(err.to_string(), "sold out: 2 seats requested, 0 available");
    // No rollback: the payment call already happened, exactly once.
    assert_eq!(payments.calls().len(), 1);
}

#[test]
fn identical_inputs_yield_identical_summaries() {
    let h = harness();
    let requests = [
        request(TicketType::Adult, 3),
        request(TicketType::Child, 2),
    ];

    let first = h.validator.purchase(42, &requests).unwrap();
    let second = h.validator.purchase(42, &requests).unwrap();

    assert_eq!(first, second);
    // Each purchase settles independently.
    assert_eq!(h.payments.calls().len(), 2);
    assert_eq!(h.reservations.calls().len(), 2);
}

#[test]
fn summary_serializes_for_auditing() {
    let h = harness();
    let summary = h
        .validator
        .purchase(1, &[request(TicketType::Adult, 1)])
        .unwrap();

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["total_tickets"], 1);
    assert_eq!(json["total_seats"], 1);
}
