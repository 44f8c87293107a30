// Smoke test against a real listening server
//
// Exercises the HTTP stack end to end with the awc client, including the
// request-id header added by middleware.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::Value;

#[actix_web::test]
async fn test_health_over_the_wire() {
    let srv = spawn_test_server();

    let mut response = srv.get("/health").send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_create_invoice_over_the_wire() {
    let srv = spawn_test_server();

    let mut response = srv
        .post("/invoices")
        .insert_header(("X-Request-ID", "smoke-1"))
        .send_json(&TestDataFactory::create_invoice_payload())
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "smoke-1");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["invoice_number"], "INV-2025-0001");
}
