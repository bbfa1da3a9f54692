//! The purchase validator: rule enforcement, summary computation, settlement.

use crate::config::PricingPolicy;
use crate::error::PurchaseError;
use crate::gateway::{PaymentGateway, SeatReservation};
use crate::types::{AccountId, Money, PurchaseSummary, TicketRequest, TicketType};
use std::sync::Arc;

/// Running totals accumulated while folding over ticket requests.
///
/// Counts are widened to `u64` so degenerate inputs cannot wrap before the
/// purchase limit is enforced.
#[derive(Debug, Default)]
struct Totals {
    tickets: u64,
    seats: u64,
    adults: u64,
    children: u64,
    infants: u64,
    amount: Money,
}

/// Validates ticket purchases, computes their summary, and settles them
/// through the payment and seat-reservation collaborators.
///
/// The validator is stateless across calls: every [`purchase`] invocation is
/// independent, and the collaborators are only invoked after all business
/// rules have passed, so an invalid request never leaves a partial charge or
/// reservation behind.
///
/// [`purchase`]: PurchaseValidator::purchase
pub struct PurchaseValidator {
    pricing: PricingPolicy,
    payments: Arc<dyn PaymentGateway>,
    reservations: Arc<dyn SeatReservation>,
}

impl PurchaseValidator {
    /// Creates a validator with the given pricing policy and collaborators.
    #[must_use]
    pub fn new(
        pricing: PricingPolicy,
        payments: Arc<dyn PaymentGateway>,
        reservations: Arc<dyn SeatReservation>,
    ) -> Self {
        Self {
            pricing,
            payments,
            reservations,
        }
    }

    /// Validates and settles a ticket purchase.
    ///
    /// 1. The account id must be a positive integer.
    /// 2. Requests are folded into per-type counts, seats, and total price.
    ///    Repeated entries for the same type are accepted and summed.
    /// 3. The aggregate ticket count must not exceed the purchase limit.
    /// 4. Child or infant tickets require at least one adult ticket.
    /// 5. On success the payment collaborator is charged, then seats are
    ///    reserved, in that order; either failure propagates unchanged with
    ///    no retry and no rollback of the earlier call.
    ///
    /// # Errors
    ///
    /// Returns a [`PurchaseError`] naming the violated rule, or the
    /// collaborator's own error if settlement fails.
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let account = AccountId::new(account_id)?;
        let summary = self.summarize(requests).inspect_err(|error| {
            tracing::warn!(account = account.get(), %error, "purchase rejected");
        })?;

        self.payments.make_payment(account, summary.total_amount)?;
        self.reservations.reserve_seats(account, summary.total_seats)?;

        tracing::info!(
            account = account.get(),
            tickets = summary.total_tickets,
            seats = summary.total_seats,
            amount_cents = summary.total_amount.cents(),
            "purchase settled"
        );
        Ok(summary)
    }

    /// Folds the requests into a summary and enforces the aggregate rules.
    fn summarize(&self, requests: &[TicketRequest]) -> Result<PurchaseSummary, PurchaseError> {
        let mut totals = Totals::default();

        for request in requests {
            let count = u64::from(request.count());
            let counter = match request.ticket_type() {
                TicketType::Adult => &mut totals.adults,
                TicketType::Child => &mut totals.children,
                TicketType::Infant => &mut totals.infants,
            };
            *counter = checked_count(*counter, count)?;
            totals.tickets = checked_count(totals.tickets, count)?;
            if request.ticket_type().holds_seat() {
                totals.seats = checked_count(totals.seats, count)?;
            }

            let line_price = self
                .pricing
                .price_of(request.ticket_type())
                .checked_multiply(request.count())
                .and_then(|line| totals.amount.checked_add(line))
                .ok_or_else(overflow)?;
            totals.amount = line_price;
        }

        if totals.tickets > u64::from(self.pricing.max_tickets) {
            return Err(PurchaseError::TooManyTickets {
                requested: totals.tickets,
                max: self.pricing.max_tickets,
            });
        }
        if (totals.children > 0 || totals.infants > 0) && totals.adults == 0 {
            return Err(PurchaseError::UnaccompaniedMinor);
        }

        // Every count is bounded by max_tickets once the limit check passes.
        Ok(PurchaseSummary {
            total_tickets: narrow(totals.tickets),
            total_amount: totals.amount,
            total_seats: narrow(totals.seats),
            total_adult_tickets: narrow(totals.adults),
            total_child_tickets: narrow(totals.children),
            total_infant_tickets: narrow(totals.infants),
        })
    }
}

/// Adds two counts, mapping the (degenerate) overflow to `InvalidRequest`.
fn checked_count(current: u64, add: u64) -> Result<u64, PurchaseError> {
    current.checked_add(add).ok_or_else(overflow)
}

fn overflow() -> PurchaseError {
    PurchaseError::InvalidRequest {
        reason: "ticket counts overflow the purchase summary".to_string(),
    }
}

fn narrow(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
