mod common;

use chrono::{DateTime, Utc};

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_timestamp_is_rfc3339() {
    let server = common::create_test_server();
    let before = Utc::now();

    let json = server.get("/healthz").await.json::<serde_json::Value>();

    let timestamp: DateTime<Utc> = json["timestamp"].as_str().unwrap().parse().unwrap();
    assert!(timestamp >= before);
}

#[tokio::test]
async fn test_healthz_is_not_treated_as_short_code() {
    let server = common::create_test_server();

    let response = server.get("/healthz").await;

    assert_ne!(response.status_code(), 302);
    assert!(response.headers().get("location").is_none());
}
