//! Pricing configuration for the purchase core.
//!
//! Business constants are injected rather than hard-coded in the validator,
//! so rule changes stay in one place and the validator remains independently
//! testable. `Default` carries the standing business rules; the environment
//! can override individual values.

use crate::types::{Money, TicketType};
use serde::{Deserialize, Serialize};
use std::env;

/// Injectable business constants: per-type prices and the purchase limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Price of an adult ticket.
    pub adult_price: Money,
    /// Price of a child ticket.
    pub child_price: Money,
    /// Price of an infant ticket (no seat, travels on an adult's lap).
    pub infant_price: Money,
    /// Maximum number of tickets in a single purchase.
    pub max_tickets: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            adult_price: Money::from_dollars(20),
            child_price: Money::from_dollars(10),
            infant_price: Money::ZERO,
            max_tickets: 20,
        }
    }
}

impl PricingPolicy {
    /// Loads the policy from environment variables, falling back to the
    /// standing business rules for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            adult_price: env::var("BOXOFFICE_ADULT_PRICE_CENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.adult_price, Money::from_cents),
            child_price: env::var("BOXOFFICE_CHILD_PRICE_CENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.child_price, Money::from_cents),
            infant_price: env::var("BOXOFFICE_INFANT_PRICE_CENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.infant_price, Money::from_cents),
            max_tickets: env::var("BOXOFFICE_MAX_TICKETS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_tickets),
        }
    }

    /// Returns the price for one ticket of the given type.
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }
}
