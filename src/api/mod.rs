mod client_parkings;
mod clients;
pub mod error;
mod parkings;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;
use error::ApiError;

pub use client_parkings::{CheckInResponse, CheckOutResponse};

/// Body returned when a record is created
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    fn new(message: &str, id: i64) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Clients
        .route(
            "/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route("/clients/:id", get(clients::get_client))
        // Parking zones
        .route(
            "/parkings",
            get(parkings::list_parkings).post(parkings::create_parking),
        )
        .route("/parkings/:id", get(parkings::get_parking))
        // Check-in / check-out
        .route(
            "/client_parkings",
            get(client_parkings::list_client_parkings)
                .post(client_parkings::check_in)
                .delete(client_parkings::check_out),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
