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
use crate::db::{Client, CreateClientRequest};
use crate::AppState;

/// List all clients
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.ledger.list_clients().await?;
    Ok(Json(clients))
}

/// Get a single client by ID
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Client>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found("Client not found"))?;
    let client = state.ledger.get_client(id).await?;
    Ok(Json(client))
}

/// Create a new client
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let client = state.ledger.create_client(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Client created", client.id)),
    ))
}
