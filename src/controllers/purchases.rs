use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::task;

use crate::{models::TicketRequest, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/purchases", post(purchase_tickets))
}

// --- Request/Response структуры ---
#[derive(Debug, Deserialize)]
pub struct PurchaseTicketsRequest {
    pub account_id: i64,
    #[serde(default)]
    pub tickets: Vec<TicketRequest>,
}

#[derive(Serialize)]
pub struct ApiError {
    success: bool,
    message: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn to_api_error(status: StatusCode, message: &str) -> (StatusCode, Json<ApiError>) {
    (status, Json(ApiError { success: false, message: message.to_string() }))
}

// --- HTTP Handlers ---

/// POST /api/purchases
pub async fn purchase_tickets(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseTicketsRequest>,
) -> ApiResult<impl IntoResponse> {
    let service = state.ticket_service.clone();

    // Коллабораторы синхронные, поэтому покупка уходит в блокирующий пул
    let outcome = task::spawn_blocking(move || service.purchase_tickets(req.account_id, &req.tickets))
        .await
        .map_err(|e| {
            tracing::error!("Purchase task failed: {:?}", e);
            to_api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        })?
        .map_err(|e| to_api_error(StatusCode::BAD_REQUEST, &e.to_string()))?;

    Ok((StatusCode::OK, Json(json!({
        "success": true,
        "total_cost": outcome.total_cost,
        "total_seats": outcome.total_seats
    }))))
}
