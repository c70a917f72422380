mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use cinema_tickets::{config::Config, router, AppState};
use common::{recording_service, RecordingPayments, RecordingSeats};

fn app() -> (Router, Arc<RecordingPayments>, Arc<RecordingSeats>) {
    let (service, payments, seats) = recording_service();
    let config = Config::from_lookup(|_| None).unwrap();
    (router(AppState::with_service(config, service)), payments, seats)
}

async fn post_purchase(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn purchase_returns_totals() {
    let (app, payments, seats) = app();

    let (status, body) = post_purchase(app, json!({
        "account_id": 99,
        "tickets": [
            { "type": "ADULT", "quantity": 1 },
            { "type": "CHILD", "quantity": 1 },
            { "type": "INFANT", "quantity": 1 }
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "total_cost": 30, "total_seats": 2 }));
    assert_eq!(payments.calls.lock().unwrap().clone(), vec![(99, 30)]);
    assert_eq!(seats.calls.lock().unwrap().clone(), vec![(99, 2)]);
}

#[tokio::test]
async fn invalid_purchase_is_a_bad_request_without_detail() {
    let (app, payments, _) = app();

    let (status, body) = post_purchase(app, json!({
        "account_id": 99,
        "tickets": [{ "type": "CHILD", "quantity": 2 }]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "invalid purchase" }));
    assert!(payments.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_tickets_field_is_an_empty_purchase() {
    let (app, _, _) = app();

    let (status, _) = post_purchase(app, json!({ "account_id": 99 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (app, _, _) = app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
