//! # Boxoffice Testing
//!
//! Testing utilities and helpers for the Boxoffice purchase core.
//!
//! This crate provides:
//! - Recording and failing doubles for the collaborator traits
//! - Property-based testing strategies for domain types
//! - A tracing initializer for integration tests
//!
//! ## Example
//!
//! ```
//! use boxoffice_core::{PricingPolicy, PurchaseValidator, TicketRequest, TicketType};
//! use boxoffice_testing::mocks::{RecordingPaymentGateway, RecordingSeatReservation};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), boxoffice_core::PurchaseError> {
//! let payments = Arc::new(RecordingPaymentGateway::new());
//! let reservations = Arc::new(RecordingSeatReservation::new());
//! let validator = PurchaseValidator::new(
//!     PricingPolicy::default(),
//!     payments.clone(),
//!     reservations.clone(),
//! );
//!
//! validator.purchase(1, &[TicketRequest::new(TicketType::Adult, 2)?])?;
//! assert_eq!(payments.calls().len(), 1);
//! assert_eq!(reservations.calls().len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Doubles for the collaborator traits.
pub mod mocks {
    use boxoffice_core::{
        AccountId, Money, PaymentGateway, PaymentGatewayError, SeatReservation,
        SeatReservationError,
    };
    use std::sync::Mutex;

    /// Payment gateway that records every call and always succeeds.
    #[derive(Debug, Default)]
    pub struct RecordingPaymentGateway {
        calls: Mutex<Vec<(AccountId, Money)>>,
    }

    impl RecordingPaymentGateway {
        /// Creates an empty recording gateway.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the recorded `(account, amount)` calls, in order.
        #[must_use]
        pub fn calls(&self) -> Vec<(AccountId, Money)> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }
    }

    impl PaymentGateway for RecordingPaymentGateway {
        fn make_payment(
            &self,
            account: AccountId,
            amount: Money,
        ) -> Result<(), PaymentGatewayError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((account, amount));
            }
            Ok(())
        }
    }

    /// Seat-reservation service that records every call and always succeeds.
    #[derive(Debug, Default)]
    pub struct RecordingSeatReservation {
        calls: Mutex<Vec<(AccountId, u32)>>,
    }

    impl RecordingSeatReservation {
        /// Creates an empty recording reservation service.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the recorded `(account, seats)` calls, in order.
        #[must_use]
        pub fn calls(&self) -> Vec<(AccountId, u32)> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }
    }

    impl SeatReservation for RecordingSeatReservation {
        fn reserve_seats(
            &self,
            account: AccountId,
            seats: u32,
        ) -> Result<(), SeatReservationError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((account, seats));
            }
            Ok(())
        }
    }

    /// Payment gateway that fails every call with a fixed error.
    #[derive(Debug)]
    pub struct FailingPaymentGateway {
        error: PaymentGatewayError,
    }

    impl FailingPaymentGateway {
        /// Creates a gateway that always returns `error`.
        #[must_use]
        pub const fn new(error: PaymentGatewayError) -> Self {
            Self { error }
        }
    }

    impl Default for FailingPaymentGateway {
        fn default() -> Self {
            Self::new(PaymentGatewayError::InsufficientFunds)
        }
    }

    impl PaymentGateway for FailingPaymentGateway {
        fn make_payment(
            &self,
            _account: AccountId,
            _amount: Money,
        ) -> Result<(), PaymentGatewayError> {
            Err(self.error.clone())
        }
    }

    /// Seat-reservation service that fails every call with a fixed error.
    #[derive(Debug)]
    pub struct FailingSeatReservation {
        error: SeatReservationError,
    }

    impl FailingSeatReservation {
        /// Creates a reservation service that always returns `error`.
        #[must_use]
        pub const fn new(error: SeatReservationError) -> Self {
            Self { error }
        }
    }

    impl Default for FailingSeatReservation {
        fn default() -> Self {
            Self::new(SeatReservationError::Timeout)
        }
    }

    impl SeatReservation for FailingSeatReservation {
        fn reserve_seats(
            &self,
            _account: AccountId,
            _seats: u32,
        ) -> Result<(), SeatReservationError> {
            Err(self.error.clone())
        }
    }
}

/// Property-based testing strategies for domain types.
pub mod properties {
    use boxoffice_core::{TicketRequest, TicketType};
    use proptest::prelude::*;

    /// Strategy producing any ticket type.
    pub fn ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Adult),
            Just(TicketType::Child),
            Just(TicketType::Infant),
        ]
    }

    /// Strategy producing a well-formed ticket request with
    /// `1..=max_count` tickets.
    pub fn ticket_request(max_count: u32) -> impl Strategy<Value = TicketRequest> {
        (ticket_type(), 1..=max_count.max(1))
            .prop_filter_map("count must be positive", |(ticket_type, count)| {
                TicketRequest::new(ticket_type, count).ok()
            })
    }

    /// Strategy producing a list of up to `max_requests` well-formed
    /// requests, each for up to `max_count` tickets.
    pub fn ticket_requests(
        max_requests: usize,
        max_count: u32,
    ) -> impl Strategy<Value = Vec<TicketRequest>> {
        prop::collection::vec(ticket_request(max_count), 0..=max_requests)
    }
}

/// Initializes a compact tracing subscriber for integration tests.
///
/// Respects `RUST_LOG`; repeated calls are a no-op so every test can call it.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .compact()
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::mocks::{RecordingPaymentGateway, RecordingSeatReservation};
    use boxoffice_core::{AccountId, Money, PaymentGateway, SeatReservation};

    #[test]
    fn recording_gateway_keeps_call_order() {
        let gateway = RecordingPaymentGateway::new();
        let account = AccountId::new(7).unwrap();
        gateway.make_payment(account, Money::from_dollars(20)).unwrap();
        gateway.make_payment(account, Money::from_dollars(10)).unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (account, Money::from_dollars(20)));
        assert_eq!(calls[1], (account, Money::from_dollars(10)));
    }

    #[test]
    fn recording_reservation_records_seats() {
        let reservation = RecordingSeatReservation::new();
        let account = AccountId::new(3).unwrap();
        reservation.reserve_seats(account, 15).unwrap();
        assert_eq!(reservation.calls(), vec![(account, 15)]);
    }
}
