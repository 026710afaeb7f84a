//! Integration tests for the receipt processor HTTP API.
//!
//! Each test builds the real router over a fresh in-memory store and drives it
//! through `axum-test`.

use axum::http::StatusCode;
use axum_test::TestServer;
use receipt_processor::api::{AppState, create_router};
use receipt_processor::store::MemoryScoreStore;
use serde_json::{Value, json};
use std::sync::Arc;

fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryScoreStore::new()));
    TestServer::new(create_router(state)).unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn mm_corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn process(server: &TestServer, receipt: &Value) -> String {
    let response = server.post("/receipts/process").json(receipt).await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn points(server: &TestServer, id: &str) -> Value {
    let response = server.get(&format!("/receipts/{id}/points")).await;
    response.assert_status_ok();
    response.json()
}

async fn stored_count(server: &TestServer) -> u64 {
    let body: Value = server.get("/health").await.json();
    body["receipts_stored"].as_u64().unwrap()
}

// ============ General Endpoint Tests ============

#[tokio::test]
async fn test_root() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Receipt processor is up and running!"}));
}

#[tokio::test]
async fn test_health_reports_stored_receipts() {
    let server = create_test_server();
    assert_eq!(stored_count(&server).await, 0);

    process(&server, &target_receipt()).await;

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["receipts_stored"], 1);
}

// ============ Receipt Endpoint Tests ============

#[tokio::test]
async fn test_process_target_receipt_scores_28() {
    let server = create_test_server();

    let id = process(&server, &target_receipt()).await;

    assert_eq!(points(&server, &id).await, json!({"points": 28}));
}

#[tokio::test]
async fn test_process_mm_corner_market_scores_109() {
    let server = create_test_server();

    let id = process(&server, &mm_corner_market_receipt()).await;

    assert_eq!(points(&server, &id).await, json!({"points": 109}));
}

#[tokio::test]
async fn test_afternoon_boundaries() {
    let server = create_test_server();
    let mut receipt = mm_corner_market_receipt();

    receipt["purchaseTime"] = json!("14:00");
    let at_two = process(&server, &receipt).await;
    receipt["purchaseTime"] = json!("16:00");
    let at_four = process(&server, &receipt).await;

    assert_eq!(points(&server, &at_two).await["points"], 109);
    assert_eq!(points(&server, &at_four).await["points"], 99);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let server = create_test_server();

    let response = server.get("/receipts/nonexistent-id/points").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_date_is_rejected() {
    let server = create_test_server();
    let mut receipt = mm_corner_market_receipt();
    receipt["purchaseDate"] = json!("2022-03-32");

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["violations"][0]["field"], "purchaseDate");
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_invalid_time_is_rejected() {
    let server = create_test_server();
    let mut receipt = mm_corner_market_receipt();
    receipt["purchaseTime"] = json!("25:00");

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["violations"][0]["field"], "purchaseTime");
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_total_without_cents_is_rejected() {
    let server = create_test_server();
    let mut receipt = mm_corner_market_receipt();
    receipt["total"] = json!("9");

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["violations"][0]["field"], "total");
}

#[tokio::test]
async fn test_empty_items_is_rejected() {
    let server = create_test_server();
    let mut receipt = mm_corner_market_receipt();
    receipt["items"] = json!([]);

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["violations"][0]["field"], "items");
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_all_violations_are_reported() {
    let server = create_test_server();
    let receipt = json!({
        "retailer": "Target!",
        "purchaseDate": "2022-02-30",
        "purchaseTime": "12:60",
        "items": [{"shortDescription": "Gum", "price": "1.5"}],
        "total": "1.50"
    });

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["retailer", "purchaseDate", "purchaseTime", "items[0].price"]
    );
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let server = create_test_server();
    let receipt = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01"
    });

    let response = server.post("/receipts/process").json(&receipt).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "MALFORMED_BODY");
    assert!(body.get("violations").is_none());
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_processing_the_same_receipt_twice_yields_distinct_ids() {
    let server = create_test_server();

    let first = process(&server, &target_receipt()).await;
    let second = process(&server, &target_receipt()).await;

    assert_ne!(first, second);
    assert_eq!(points(&server, &first).await, points(&server, &second).await);
    assert_eq!(stored_count(&server).await, 2);
}
