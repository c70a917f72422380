//! ticket.rs
//!
//! Проверка и расчёт покупки билетов для одного аккаунта.
//!
//! Покупка проходит линейный конвейер правил с выходом на первой ошибке:
//! аккаунт, суммирование заявок по категориям, общее количество билетов,
//! наличие взрослого, младенцы не больше взрослых. Только после всех проверок
//! вызываются внешние сервисы: сначала оплата, затем бронирование мест.
//! Любой сбой, включая сбои и паники коллабораторов, превращается в
//! единственную ошибку [`InvalidPurchase`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    error::{InvalidPurchase, PurchaseRejection},
    models::{AccountId, AggregatedRequest, PurchaseOutcome, TicketCategory, TicketRequest},
    services::{payment::TicketPaymentService, seat_booking::SeatReservationService},
};

/// Максимум билетов в одной покупке.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 20;

#[derive(Clone)]
pub struct TicketService {
    payment_service: Arc<dyn TicketPaymentService>,
    seats_service: Arc<dyn SeatReservationService>,
}

impl TicketService {
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        seats_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment_service,
            seats_service,
        }
    }

    /// Проверяет заявки, списывает оплату и бронирует места.
    ///
    /// Вызывающая сторона получает только [`InvalidPurchase`]; конкретное
    /// нарушенное правило пишется в лог.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, InvalidPurchase> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.process(account_id, requests)));

        match result {
            Ok(Ok(outcome)) => {
                info!(
                    "Purchase completed for account {}: cost={}, seats={}",
                    account_id, outcome.total_cost, outcome.total_seats
                );
                Ok(outcome)
            }
            Ok(Err(rejection)) => {
                warn!(account_id, reason = %rejection, "Purchase rejected");
                Err(InvalidPurchase)
            }
            Err(_) => {
                error!(account_id, "Purchase aborted by an unexpected fault");
                Err(InvalidPurchase)
            }
        }
    }

    fn process(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseRejection> {
        let account_id = AccountId::try_from(account_id)?;

        let tickets = AggregatedRequest::from_requests(requests)?;

        validate_total_ticket_quantity(&tickets)?;
        validate_minor_supervision(&tickets)?;
        validate_infant_seats(&tickets)?;

        let total_cost = tickets.total_cost()?;
        self.payment_service
            .make_payment(account_id, total_cost)
            .map_err(PurchaseRejection::Payment)?;

        // Компенсации нет: если бронирование упадёт, списание остаётся.
        let total_seats = tickets.total_seats()?;
        self.seats_service
            .reserve_seat(account_id, total_seats)
            .map_err(PurchaseRejection::Reservation)?;

        Ok(PurchaseOutcome {
            total_cost,
            total_seats,
        })
    }
}

fn validate_total_ticket_quantity(tickets: &AggregatedRequest) -> Result<(), PurchaseRejection> {
    let total = tickets.total_tickets()?;
    if total > 0 && total <= MAX_TICKETS_PER_PURCHASE {
        Ok(())
    } else {
        Err(PurchaseRejection::TicketCountOutOfRange {
            total,
            max: MAX_TICKETS_PER_PURCHASE,
        })
    }
}

fn validate_minor_supervision(tickets: &AggregatedRequest) -> Result<(), PurchaseRejection> {
    if tickets.quantity(TicketCategory::Adult) >= 1 {
        Ok(())
    } else {
        Err(PurchaseRejection::UnaccompaniedMinor)
    }
}

fn validate_infant_seats(tickets: &AggregatedRequest) -> Result<(), PurchaseRejection> {
    let infants = tickets.quantity(TicketCategory::Infant);
    let adults = tickets.quantity(TicketCategory::Adult);

    if infants <= adults {
        Ok(())
    } else {
        Err(PurchaseRejection::InfantsExceedAdults { infants, adults })
    }
}
