use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::error::ApiError;
use super::CreatedResponse;
use crate::db::{CreateParkingRequest, Parking};
use crate::AppState;

/// List all parking zones
pub async fn list_parkings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Parking>>, ApiError> {
    let parkings = state.ledger.list_parkings().await?;
    Ok(Json(parkings))
}

/// Get a single parking zone by ID
pub async fn get_parking(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Parking>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found("Parking not found"))?;
    let parking = state.ledger.get_parking(id).await?;
    Ok(Json(parking))
}

/// Create a parking zone with every place available
pub async fn create_parking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateParkingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let parking = state.ledger.create_parking(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Parking zone created", parking.id)),
    ))
}
