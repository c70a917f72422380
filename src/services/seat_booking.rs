use serde::Serialize;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

use crate::{
    config::SeatBookingConfig,
    error::CollaboratorError,
    models::AccountId,
    services::post_json,
};

/// Внешний сервис бронирования мест. Вызывается после успешной оплаты.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seat_count: i64) -> Result<(), CollaboratorError>;
}

#[derive(Debug, Serialize)]
struct ReservationRequest {
    #[serde(rename = "accountId")]
    account_id: i64,
    #[serde(rename = "seatCount")]
    seat_count: i64,
}

#[derive(Clone)]
pub struct SeatBookingClient {
    base_url: String,
    http_client: reqwest::Client,
    runtime: Handle,
}

impl SeatBookingClient {
    pub fn from_config(
        config: &SeatBookingConfig,
        base_url: &str,
        runtime: Handle,
    ) -> Result<Self, CollaboratorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            runtime,
        })
    }
}

impl SeatReservationService for SeatBookingClient {
    fn reserve_seat(&self, account_id: AccountId, seat_count: i64) -> Result<(), CollaboratorError> {
        let request = ReservationRequest {
            account_id: account_id.get(),
            seat_count,
        };

        info!("Reserving {} seats for account {}", seat_count, account_id);

        post_json(
            &self.runtime,
            &self.http_client,
            &format!("{}/api/v1/reservations", self.base_url),
            &request,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: i64) -> Result<(), CollaboratorError> {
        info!(account_id = %account_id, seat_count, "Seats reserved (no booking service configured)");
        Ok(())
    }
}
