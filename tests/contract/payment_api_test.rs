// Contract tests for POST /payments

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::Method;
use helpers::*;
use invoice_api::AppState;
use serde_json::json;

#[actix_web::test]
async fn test_create_payment_response_schema() {
    let (status, body) = post("/payments", TestDataFactory::create_payment_payload()).await;

    assert_eq!(status, 201);
    assert_eq!(body["id"], 1);
    assert_eq!(body["invoice_id"], 101);
    assert_eq!(body["amount"].as_f64(), Some(1500.0));
    assert_eq!(body["payment_date"], "2025-10-17");
    assert_eq!(body["method"], "card");
    assert_eq!(body["status"], "processed");
}

#[actix_web::test]
async fn test_client_cannot_set_status() {
    let mut payload = TestDataFactory::create_payment_payload();
    payload["status"] = json!("failed");

    let (status, body) = post("/payments", payload).await;

    assert_eq!(status, 201);
    assert_eq!(body["status"], "processed");
}

#[actix_web::test]
async fn test_every_method_is_processed() {
    for method in ["card", "bank_transfer", "cash"] {
        let mut payload = TestDataFactory::create_payment_payload();
        payload["method"] = json!(method);

        let (status, body) = post("/payments", payload).await;

        assert_eq!(status, 201);
        assert_eq!(body["method"], method);
        assert_eq!(body["status"], "processed");
    }
}

#[actix_web::test]
async fn test_unknown_invoice_is_accepted() {
    let mut payload = TestDataFactory::create_payment_payload();
    payload["invoice_id"] = json!(999_999);

    let (status, _) = post("/payments", payload).await;
    assert_eq!(status, 201);
}

#[actix_web::test]
async fn test_payment_and_invoice_sequences_are_independent() {
    let state = AppState::default();

    call_with_state(
        &state,
        Method::POST,
        "/invoices",
        Some(TestDataFactory::create_invoice_payload()),
    )
    .await;
    let (_, payment) = call_with_state(
        &state,
        Method::POST,
        "/payments",
        Some(TestDataFactory::create_payment_payload()),
    )
    .await;

    assert_eq!(payment["id"], 1);
}
