//! Error taxonomy for purchase validation.

use crate::gateway::{PaymentGatewayError, SeatReservationError};
use thiserror::Error;

/// Errors that can reject a ticket purchase.
///
/// Validation errors are raised before any collaborator is invoked, so a
/// failed validation never leaves a partial charge or reservation behind.
/// Collaborator failures are carried transparently: their message and source
/// surface to the caller untranslated.
#[derive(Error, Debug)]
pub enum PurchaseError {
    /// The account identifier is not a positive integer.
    #[error("invalid account: account id must be a positive integer")]
    InvalidAccount,

    /// A ticket request is malformed (zero count, unsupported type).
    #[error("invalid ticket request: {reason}")]
    InvalidRequest {
        /// What made the request malformed.
        reason: String,
    },

    /// The aggregate ticket count exceeds the per-purchase limit.
    #[error("too many tickets: {requested} requested, at most {max} per purchase")]
    TooManyTickets {
        /// Total tickets requested across all types.
        requested: u64,
        /// The configured per-purchase limit.
        max: u32,
    },

    /// Child or infant tickets were requested without any adult ticket.
    #[error("child and infant tickets must be accompanied by an adult ticket")]
    UnaccompaniedMinor,

    /// The payment collaborator failed; propagated unchanged.
    #[error(transparent)]
    Payment(#[from] PaymentGatewayError),

    /// The seat-reservation collaborator failed; propagated unchanged.
    #[error(transparent)]
    SeatReservation(#[from] SeatReservationError),
}

impl PurchaseError {
    /// Whether the error was raised by validation, before any side effect.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Payment(_) | Self::SeatReservation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert!(PurchaseError::InvalidAccount.is_validation());
        assert!(PurchaseError::UnaccompaniedMinor.is_validation());
        assert!(
            !PurchaseError::Payment(PaymentGatewayError::InsufficientFunds).is_validation()
        );
    }

    #[test]
    fn collaborator_errors_surface_transparently() {
        let err = PurchaseError::from(PaymentGatewayError::Declined {
            reason: "expired card".to_string(),
        });
        assert_eq!(err.to_string(), "card declined: expired card");
    }
}
