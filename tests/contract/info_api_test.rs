// Contract tests for the informational endpoints: /, /health, /about

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

#[actix_web::test]
async fn test_root_reports_running() {
    let (status, body) = get("/").await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Invoice Management API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["status"], "running");
}

#[actix_web::test]
async fn test_health_is_healthy() {
    let (status, body) = get("/health").await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({"status": "healthy"}));
}

#[actix_web::test]
async fn test_about_metadata() {
    let (status, body) = get("/about").await;

    assert_eq!(status, 200);
    assert!(body["project"].is_string());
    assert!(body["author"].is_string());
    assert!(body["tech_stack"].is_array());
}

#[actix_web::test]
async fn test_unknown_route_uses_error_envelope() {
    let (status, body) = get("/does-not-exist").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 404);
}
