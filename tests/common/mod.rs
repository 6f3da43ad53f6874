#![allow(dead_code)]

use agency_api::routes;
use agency_api::state::AppState;
use axum::body::{Body, to_bytes};
use axum::response::Response;
use axum_test::TestServer;
use serde_json::{Value, json};

pub const TEST_HOST: &str = "agency.test:8080";

pub async fn create_test_state() -> AppState {
    AppState::in_memory(8, None).await.unwrap()
}

pub async fn create_test_state_with_base(base: &str) -> AppState {
    AppState::in_memory(8, Some(base.to_string())).await.unwrap()
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(routes::router(state)).unwrap()
}

pub async fn create_default_server() -> TestServer {
    create_test_server(create_test_state().await)
}

pub fn valid_contact() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+234 800 000 0000",
        "serviceInterest": "website",
        "message": "We would like a new marketing website."
    })
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
