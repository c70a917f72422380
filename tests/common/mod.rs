#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cinema_tickets::{
    error::CollaboratorError,
    models::AccountId,
    services::{
        payment::TicketPaymentService, seat_booking::SeatReservationService, ticket::TicketService,
    },
};

#[derive(Default)]
pub struct RecordingPayments {
    pub calls: Mutex<Vec<(i64, i64)>>,
}

impl TicketPaymentService for RecordingPayments {
    fn make_payment(&self, account_id: AccountId, amount: i64) -> Result<(), CollaboratorError> {
        self.calls.lock().unwrap().push((account_id.get(), amount));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSeats {
    pub calls: Mutex<Vec<(i64, i64)>>,
}

impl SeatReservationService for RecordingSeats {
    fn reserve_seat(&self, account_id: AccountId, seat_count: i64) -> Result<(), CollaboratorError> {
        self.calls.lock().unwrap().push((account_id.get(), seat_count));
        Ok(())
    }
}

pub fn recording_service() -> (TicketService, Arc<RecordingPayments>, Arc<RecordingSeats>) {
    let payments = Arc::new(RecordingPayments::default());
    let seats = Arc::new(RecordingSeats::default());
    let service = TicketService::new(payments.clone(), seats.clone());
    (service, payments, seats)
}
