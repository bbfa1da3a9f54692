//! Domain types for the Boxoffice purchase core.
//!
//! This module contains the value objects a purchase is made of: validated
//! identifiers, the closed set of ticket types, ticket requests built through
//! smart constructors, cents-based money, and the purchase summary aggregate.

use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the purchasing account.
///
/// Only positive identifiers are valid; construction rejects everything else,
/// so any `AccountId` in circulation has already passed the account rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId`, rejecting non-positive identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidAccount`] if `id <= 0`.
    pub const fn new(id: i64) -> Result<Self, PurchaseError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(PurchaseError::InvalidAccount)
        }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

// ============================================================================
// Ticket types
// ============================================================================

/// The closed set of ticket types.
///
/// Prices and seat allocation are determined per type: adults and children
/// occupy a seat, infants travel on an adult's lap and hold none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Full-price ticket with a seat.
    Adult,
    /// Reduced-price ticket with a seat.
    Child,
    /// Free ticket without a seat.
    Infant,
}

impl TicketType {
    /// All ticket types, in pricing order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Returns the canonical upper-case name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type is allocated a physical seat.
    #[must_use]
    pub const fn holds_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    /// Parses a canonical type name, for wrapper layers marshaling text input.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidRequest`] for anything outside
    /// `ADULT`/`CHILD`/`INFANT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(PurchaseError::InvalidRequest {
                reason: format!("unsupported ticket type `{other}`"),
            }),
        }
    }
}

// ============================================================================
// Ticket requests
// ============================================================================

/// A request for `count` tickets of one type.
///
/// Built only through [`TicketRequest::new`], so a `TicketRequest` is
/// well-formed by construction: the type is one of the closed set and the
/// count is a positive integer. Fields are private and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketRequest {
    /// Creates a validated ticket request.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidRequest`] if `count` is zero.
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, PurchaseError> {
        if count == 0 {
            return Err(PurchaseError::InvalidRequest {
                reason: format!("ticket count for {ticket_type} must be a positive integer"),
            });
        }
        Ok(Self { ticket_type, count })
    }

    /// Returns the requested ticket type.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

// ============================================================================
// Money value object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole currency units, checking overflow.
    #[must_use]
    pub const fn checked_from_dollars(dollars: u64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Creates a `Money` value from whole currency units.
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (`dollars * 100 > u64::MAX`).
    /// Use [`Money::checked_from_dollars`] for non-panicking conversion.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match Self::checked_from_dollars(dollars) {
            Some(money) => money,
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole currency units (rounded down).
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity with overflow checking.
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Purchase summary
// ============================================================================

/// The aggregated, priced result of a validated batch of ticket requests.
///
/// Built fresh by [`crate::PurchaseValidator::purchase`] and never mutated
/// afterwards. Invariants:
///
/// - `total_tickets = total_adult_tickets + total_child_tickets + total_infant_tickets`
/// - `total_seats = total_adult_tickets + total_child_tickets`
/// - `total_amount` is the per-type price times count, summed over all types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    /// Total number of tickets across all types.
    pub total_tickets: u32,
    /// Total price of the purchase.
    pub total_amount: Money,
    /// Number of physical seats to reserve (infants hold none).
    pub total_seats: u32,
    /// Number of adult tickets.
    pub total_adult_tickets: u32,
    /// Number of child tickets.
    pub total_child_tickets: u32,
    /// Number of infant tickets.
    pub total_infant_tickets: u32,
}

impl PurchaseSummary {
    /// Returns the ticket count for one type.
    #[must_use]
    pub const fn tickets_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.total_adult_tickets,
            TicketType::Child => self.total_child_tickets,
            TicketType::Infant => self.total_infant_tickets,
        }
    }
}
