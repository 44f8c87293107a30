// Integration tests for GET /invoices filtering and windowing

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

#[actix_web::test]
async fn test_list_all_in_fixture_order() {
    let (status, body) = get("/invoices").await;

    assert_eq!(status, 200);
    assert_eq!(invoice_ids(&body), vec![1, 2, 3, 4, 5]);
}

#[actix_web::test]
async fn test_status_filter_returns_only_matching() {
    let (status, body) = get("/invoices?status=paid").await;

    assert_eq!(status, 200);
    assert_eq!(invoice_ids(&body), vec![1, 4]);
    assert_eq!(body["total"], 2);
    for invoice in body["invoices"].as_array().unwrap() {
        assert_eq!(invoice["status"], "paid");
    }
}

#[actix_web::test]
async fn test_window_positions_one_and_two() {
    let (status, body) = get("/invoices?limit=2&skip=1").await;

    assert_eq!(status, 200);
    assert_eq!(invoice_ids(&body), vec![2, 3]);
    assert_eq!(body["total"], 5);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["skip"], 1);
}

#[actix_web::test]
async fn test_total_counts_filtered_not_windowed() {
    let (_, body) = get("/invoices?status=pending&limit=1").await;

    assert_eq!(invoice_ids(&body), vec![2]);
    assert_eq!(body["total"], 2);
}

#[actix_web::test]
async fn test_skip_beyond_end_is_empty() {
    let (status, body) = get("/invoices?skip=10").await;

    assert_eq!(status, 200);
    assert!(invoice_ids(&body).is_empty());
    assert_eq!(body["total"], 5);
}

#[actix_web::test]
async fn test_zero_limit_is_empty_window() {
    let (_, body) = get("/invoices?limit=0").await;

    assert!(invoice_ids(&body).is_empty());
    assert_eq!(body["total"], 5);
}

#[actix_web::test]
async fn test_unknown_status_is_rejected() {
    let (status, body) = get("/invoices?status=cancelled").await;

    assert_eq!(status, 422);
    assert_eq!(assert_validation_error(&body), vec!["status"]);
}

#[actix_web::test]
async fn test_negative_skip_is_rejected() {
    let (status, body) = get("/invoices?skip=-1").await;

    assert_eq!(status, 422);
    assert_eq!(assert_validation_error(&body), vec!["skip"]);
}

#[actix_web::test]
async fn test_non_numeric_limit_is_rejected() {
    let (status, body) = get("/invoices?limit=abc").await;

    assert_eq!(status, 422);
    assert_eq!(assert_validation_error(&body), vec!["limit"]);
}
