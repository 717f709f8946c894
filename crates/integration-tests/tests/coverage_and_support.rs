//! Coverage lookups and support flows over HTTP.

use std::sync::Arc;

use black_cable_core::{
    Catalog, CoverageMap, CoverageResult, StaticCoverageTable, ZipCode,
};
use black_cable_integration_tests::TestServer;
use black_cable_storefront::config::StorefrontConfig;
use black_cable_storefront::state::AppState;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn get(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let resp = server
        .client()
        .get(server.url(path))
        .send()
        .await
        .expect("GET failed");
    let status = resp.status();
    (status, resp.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_zip_lookup_sanitizes_input() {
    let server = TestServer::start().await;

    let (status, body) = get(&server, "/coverage/10003-4567").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zip"], "10003");
    assert_eq!(body["available"], true);
    assert_eq!(body["price"], "$49.99");
}

#[tokio::test]
async fn test_unknown_zip_is_unavailable() {
    let server = TestServer::start().await;
    let (status, body) = get(&server, "/coverage/55555").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "zip": "55555", "available": false }));
}

#[tokio::test]
async fn test_custom_coverage_source() {
    let zip = ZipCode::parse("02139").expect("valid zip");
    let table = StaticCoverageTable::new()
        .with_entry(&zip, CoverageResult::available("2 Gbps", "$59.99"));
    let state = AppState::with_parts(
        StorefrontConfig::default(),
        Catalog::standard(),
        Arc::new(table),
        CoverageMap::new(Vec::new()),
    );
    let server = TestServer::start_with(state).await;

    let (_, body) = get(&server, "/coverage/02139").await;
    assert_eq!(body["speed"], "2 Gbps");

    let (_, body) = get(&server, "/coverage/10001").await;
    assert_eq!(body["available"], false);

    let (_, body) = get(&server, "/coverage/map?x=150&y=100").await;
    assert!(body["zone"].is_null());
}

#[tokio::test]
async fn test_map_click_reports_zone() {
    let server = TestServer::start().await;
    let (_, body) = get(&server, "/coverage/map?x=600&y=320").await;
    assert_eq!(body["zone"]["zip"], "10007");
    assert_eq!(body["zone"]["signal_strength"], 90);
    assert_eq!(body["zone"]["coverage"]["speed"], "900 Mbps");
}

#[tokio::test]
async fn test_chat_round_trip() {
    let server = TestServer::start().await;

    let (_, window) = get(&server, "/support/chat/technical").await;
    assert_eq!(window["title"], "Chat with Technical Support");

    let resp = server
        .client()
        .post(server.url("/support/chat/technical"))
        .json(&json!({ "message": "My router keeps blinking" }))
        .send()
        .await
        .expect("chat failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("body is not JSON");
    assert_eq!(
        body["messages"][1]["text"],
        "Thanks for your message! For immediate assistance, please call us at (855) 569-7568. \
         Our team will be happy to help you with your technical needs."
    );
}

#[tokio::test]
async fn test_booking_confirmed_with_reference() {
    let server = TestServer::start().await;

    let resp = server
        .client()
        .post(server.url("/support/bookings"))
        .json(&json!({
            "customer_name": "Jordan Lee",
            "customer_phone": "8555697568",
            "preferred_date": "2999-12-31",
            "time_slot": "evening"
        }))
        .send()
        .await
        .expect("booking failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("body is not JSON");
    let reference = body["confirmation"]["reference"]
        .as_str()
        .expect("reference is a string");
    assert!(reference.starts_with("TCH"));
    assert_eq!(reference.len(), 9);
    assert_eq!(body["confirmation"]["time_slot"], "evening");
    assert!(
        body["confirmation"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("Evening (5PM - 8PM)"))
    );
}

#[tokio::test]
async fn test_booking_form_is_rate_limited() {
    let server = TestServer::start().await;
    let invalid = json!({
        "customer_name": "J",
        "customer_phone": "1",
        "preferred_date": "soon",
        "time_slot": "morning"
    });

    let mut statuses = Vec::new();
    for _ in 0..8 {
        let resp = server
            .client()
            .post(server.url("/support/bookings"))
            .json(&invalid)
            .send()
            .await
            .expect("booking failed");
        statuses.push(resp.status());
    }

    assert_eq!(statuses[0], StatusCode::UNPROCESSABLE_ENTITY);
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
}
