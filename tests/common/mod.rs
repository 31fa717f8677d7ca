//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use parklog::config::Config;
use parklog::AppState;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state shared with the router
    pub state: Arc<AppState>,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database
    pub async fn new() -> Self {
        let db = parklog::db::init_in_memory()
            .await
            .expect("Failed to open in-memory database");
        let state = Arc::new(AppState::new(Config::default(), db));
        let router = parklog::api::create_router(state.clone());

        Self { router, state }
    }

    /// Send a request and return the status with the parsed JSON body
    /// (`Value::Null` when the body is empty or not JSON)
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(body)).await
    }

    /// Create a client and return its id
    pub async fn create_client(&self, name: &str, credit_card: Option<&str>) -> i64 {
        let (status, body) = self
            .post(
                "/api/clients",
                serde_json::json!({
                    "name": name,
                    "surname": "Client",
                    "credit_card": credit_card,
                    "car_number": "A123BC",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create client failed: {body}");
        body["id"].as_i64().expect("client id")
    }

    /// Create a parking zone and return its id
    pub async fn create_parking(&self, opened: bool, count_places: i64) -> i64 {
        let (status, body) = self
            .post(
                "/api/parkings",
                serde_json::json!({
                    "address": "Test Parking",
                    "opened": opened,
                    "count_places": count_places,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create parking failed: {body}");
        body["id"].as_i64().expect("parking id")
    }

    /// Current free-place counter of a parking zone
    pub async fn available_places(&self, parking_id: i64) -> i64 {
        let (status, body) = self.get(&format!("/api/parkings/{parking_id}")).await;
        assert_eq!(status, StatusCode::OK);
        body["count_available_places"]
            .as_i64()
            .expect("count_available_places")
    }
}
