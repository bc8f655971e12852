#![allow(dead_code)]

use axum_test::TestServer;
use linkshort::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use linkshort::routes::build_router;
use linkshort::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()), BASE_URL)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgLinkRepository::new(Arc::new(pool))), BASE_URL)
}

/// Full router over an empty in-memory store.
pub fn create_test_server() -> TestServer {
    TestServer::new(build_router(create_test_state(), "*")).unwrap()
}

/// Creates a link through the API and returns the response body.
pub async fn create_link(server: &TestServer, url: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "target_url": url, "custom_code": code }),
        None => json!({ "target_url": url }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
