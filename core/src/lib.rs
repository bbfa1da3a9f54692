//! Boxoffice purchase core.
//!
//! A small, synchronous validation and pricing component for ticket
//! purchases. It enforces the business rules, computes a deterministic
//! [`PurchaseSummary`], and settles successful purchases through two external
//! collaborators.
//!
//! # Business rules
//!
//! - Three ticket types: Adult (20), Child (10), Infant (free, no seat).
//! - At most 20 tickets per purchase.
//! - Child and infant tickets require at least one adult ticket.
//! - Accounts are identified by a positive integer.
//!
//! Prices and the purchase limit are injected through [`PricingPolicy`]
//! rather than hard-coded, so the validator stays pure and independently
//! testable.
//!
//! # Flow
//!
//! ```text
//! purchase(account_id, requests)
//!     │
//!     ├─ validate account id ─────────────── InvalidAccount
//!     ├─ fold requests into totals ───────── InvalidRequest
//!     ├─ enforce aggregate limit ─────────── TooManyTickets
//!     ├─ enforce adult accompaniment ─────── UnaccompaniedMinor
//!     │
//!     ├─ PaymentGateway::make_payment ────── failure propagates
//!     ├─ SeatReservation::reserve_seats ──── failure propagates
//!     │
//!     └─ PurchaseSummary
//! ```
//!
//! Collaborators are only invoked after every rule has passed, so an invalid
//! request never causes a partial charge or reservation. There are no
//! retries and no rollback: a collaborator failure surfaces to the caller
//! unchanged, mid-sequence.
//!
//! # Example
//!
//! ```
//! use boxoffice_core::{
//!     MockPaymentGateway, MockSeatReservation, PricingPolicy, PurchaseValidator,
//!     TicketRequest, TicketType,
//! };
//!
//! # fn main() -> Result<(), boxoffice_core::PurchaseError> {
//! let validator = PurchaseValidator::new(
//!     PricingPolicy::default(),
//!     MockPaymentGateway::shared(),
//!     MockSeatReservation::shared(),
//! );
//!
//! let summary = validator.purchase(
//!     1,
//!     &[
//!         TicketRequest::new(TicketType::Adult, 2)?,
//!         TicketRequest::new(TicketType::Infant, 1)?,
//!     ],
//! )?;
//!
//! assert_eq!(summary.total_tickets, 3);
//! assert_eq!(summary.total_seats, 2);
//! assert_eq!(summary.total_amount.dollars(), 40);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod types;
pub mod validator;

pub use config::PricingPolicy;
pub use error::PurchaseError;
pub use gateway::{
    MockPaymentGateway, MockSeatReservation, PaymentGateway, PaymentGatewayError, SeatReservation,
    SeatReservationError,
};
pub use types::{AccountId, Money, PurchaseSummary, TicketRequest, TicketType};
pub use validator::PurchaseValidator;
