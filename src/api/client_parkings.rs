//! Check-in and check-out endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use crate::db::{ClientParking, ClientParkingRequest};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub message: String,
    pub log_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckOutResponse {
    pub message: String,
}

/// List the session log
pub async fn list_client_parkings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClientParking>>, ApiError> {
    let sessions = state.ledger.list_sessions().await?;
    Ok(Json(sessions))
}

/// Check a client's car into a parking zone
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClientParkingRequest>, JsonRejection>,
) -> Result<Json<CheckInResponse>, ApiError> {
    let Json(req) = payload?;
    let entry = state.ledger.check_in(req).await?;

    Ok(Json(CheckInResponse {
        message: "Car checked in".to_string(),
        log_id: entry.id,
    }))
}

/// Check a client's car out of a parking zone
pub async fn check_out(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClientParkingRequest>, JsonRejection>,
) -> Result<Json<CheckOutResponse>, ApiError> {
    let Json(req) = payload?;
    state.ledger.check_out(req).await?;

    Ok(Json(CheckOutResponse {
        message: "Car checked out".to_string(),
    }))
}
