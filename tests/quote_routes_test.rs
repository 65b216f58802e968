mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_quote_missing_dates_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/yachts/aurora/quote")
        .set_json(&json!({ "start_date": "2025-07-05" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_quote_reversed_dates_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/yachts/aurora/quote")
        .set_json(&json!({
            "start_date": "2025-07-10",
            "end_date": "2025-07-05"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_quote_five_july_days() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/yachts/aurora/quote")
        .set_json(&json!({
            "start_date": "2025-07-05",
            "end_date": "2025-07-09",
            "booking_date": "2025-06-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["days"], 5);
    assert_eq!(body["primary_season"], "high");
    assert_eq!(body["base_fee"], 10000.0);
    assert_eq!(body["tax_amount"], 2100.0);
    assert_eq!(body["apa_amount"], 3000.0);
    assert_eq!(body["fixed_fees"], 750.0);
    assert_eq!(body["total"], 15850.0);
    assert!(body["early_bird"].is_null());
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
#[serial]
async fn test_quote_early_bird_booking() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/yachts/aurora/quote")
        .set_json(&json!({
            "start_date": "2025-07-05",
            "end_date": "2025-07-09",
            "booking_date": "2025-01-15"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["base_fee"], 9000.0);
    assert_eq!(body["early_bird"]["original_fee"], 10000.0);
    assert_eq!(body["early_bird"]["discount_amount"], 1000.0);
    assert_eq!(body["tax_amount"], 1890.0);
}

#[actix_rt::test]
#[serial]
async fn test_quote_spanning_september_boundary() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/yachts/aurora/quote")
        .set_json(&json!({
            "start_date": "2025-08-31",
            "end_date": "2025-09-02",
            "booking_date": "2025-06-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["days"], 3);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["season"], "medium");
    assert_eq!(rows[0]["days"], 1);
    assert_eq!(rows[1]["season"], "high");
    assert_eq!(rows[1]["days"], 2);
}
