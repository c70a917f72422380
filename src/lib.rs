pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::runtime::Handle;
use tower_http::trace::TraceLayer;
use tracing::info;

use error::CollaboratorError;
use services::{
    payment::{LoggingPaymentService, PaymentGatewayClient, TicketPaymentService},
    seat_booking::{LoggingSeatReservationService, SeatBookingClient, SeatReservationService},
    ticket::TicketService,
};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub ticket_service: Arc<TicketService>,
}

impl AppState {
    /// Выбирает коллабораторов по конфигурации. Должен вызываться внутри tokio-рантайма.
    pub fn new(config: config::Config) -> Result<Arc<Self>, CollaboratorError> {
        let runtime = Handle::current();

        let payment_service: Arc<dyn TicketPaymentService> = match &config.payment.gateway_url {
            Some(url) => {
                info!("Payment gateway: {}", url);
                Arc::new(PaymentGatewayClient::from_config(&config.payment, url, runtime.clone())?)
            }
            None => {
                info!("Payment gateway not configured, payments are only logged");
                Arc::new(LoggingPaymentService)
            }
        };

        let seats_service: Arc<dyn SeatReservationService> = match &config.seat_booking.url {
            Some(url) => {
                info!("Seat booking service: {}", url);
                Arc::new(SeatBookingClient::from_config(&config.seat_booking, url, runtime)?)
            }
            None => {
                info!("Seat booking service not configured, reservations are only logged");
                Arc::new(LoggingSeatReservationService)
            }
        };

        Ok(Self::with_service(config, TicketService::new(payment_service, seats_service)))
    }

    pub fn with_service(config: config::Config, ticket_service: TicketService) -> Arc<Self> {
        Arc::new(Self {
            config,
            ticket_service: Arc::new(ticket_service),
        })
    }
}

/// Главный роутер приложения.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Cinema Tickets API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
