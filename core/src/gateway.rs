//! Collaborator interfaces for payment and seat reservation.
//!
//! The purchase core delegates charging and seat booking to external services
//! behind these traits. In production they would be backed by real payment
//! and reservation integrations; this module ships always-succeeding mocks
//! for development wiring, and richer test doubles live in
//! `boxoffice-testing`.

use crate::types::{AccountId, Money};
use std::sync::Arc;
use thiserror::Error;

/// Payment collaborator error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentGatewayError {
    /// The card was declined by the processor.
    #[error("card declined: {reason}")]
    Declined {
        /// Decline reason reported by the processor.
        reason: String,
    },
    /// The account cannot cover the amount.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The gateway did not answer in time.
    #[error("payment gateway timeout")]
    Timeout,
    /// Any other gateway failure.
    #[error("payment error: {message}")]
    Other {
        /// Error message from the gateway.
        message: String,
    },
}

/// Seat-reservation collaborator error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatReservationError {
    /// Not enough seats remain for the booking.
    #[error("sold out: {requested} seats requested, {available} available")]
    SoldOut {
        /// Seats requested.
        requested: u32,
        /// Seats still available.
        available: u32,
    },
    /// The reservation service did not answer in time.
    #[error("seat reservation timeout")]
    Timeout,
    /// Any other reservation failure.
    #[error("seat reservation error: {message}")]
    Other {
        /// Error message from the reservation service.
        message: String,
    },
}

/// Abstraction over the external payment-charging service.
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to the account.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentGatewayError`] if the charge fails; the purchase
    /// core propagates it unchanged.
    fn make_payment(&self, account: AccountId, amount: Money) -> Result<(), PaymentGatewayError>;
}

/// Abstraction over the external seat-reservation service.
pub trait SeatReservation: Send + Sync {
    /// Reserves `seats` physical seats for the account.
    ///
    /// # Errors
    ///
    /// Returns a [`SeatReservationError`] if the booking fails; the purchase
    /// core propagates it unchanged.
    fn reserve_seats(&self, account: AccountId, seats: u32) -> Result<(), SeatReservationError>;
}

/// Mock payment gateway (always succeeds, for development wiring).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    /// Creates a new mock payment gateway.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn make_payment(&self, account: AccountId, amount: Money) -> Result<(), PaymentGatewayError> {
        tracing::info!(
            account = account.get(),
            amount_cents = amount.cents(),
            "mock payment processed"
        );
        Ok(())
    }
}

/// Mock seat reservation (always succeeds, for development wiring).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSeatReservation;

impl MockSeatReservation {
    /// Creates a new mock seat-reservation service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservation> {
        Arc::new(Self::new())
    }
}

impl SeatReservation for MockSeatReservation {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> Result<(), SeatReservationError> {
        tracing::info!(account = account.get(), seats, "mock seats reserved");
        Ok(())
    }
}
