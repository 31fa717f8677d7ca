//! Check-in/check-out session log models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row per (client, parking) pair; `time_out == None` marks an active session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ClientParking {
    pub id: i64,
    pub client_id: i64,
    pub parking_id: i64,
    pub time_in: String,
    pub time_out: Option<String>,
}

impl ClientParking {
    pub fn is_active(&self) -> bool {
        self.time_out.is_none()
    }
}

/// Body of both check-in and check-out requests
#[derive(Debug, Default, Deserialize)]
pub struct ClientParkingRequest {
    pub client_id: Option<i64>,
    pub parking_id: Option<i64>,
}

impl ClientParkingRequest {
    pub fn new(client_id: i64, parking_id: i64) -> Self {
        Self {
            client_id: Some(client_id),
            parking_id: Some(parking_id),
        }
    }
}
