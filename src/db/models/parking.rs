//! Parking zone models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Parking {
    pub id: i64,
    pub address: String,
    pub opened: bool,
    pub count_places: i64,
    pub count_available_places: i64,
}

impl Parking {
    pub fn has_available_places(&self) -> bool {
        self.count_available_places > 0
    }

    pub fn occupied_places(&self) -> i64 {
        self.count_places - self.count_available_places
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateParkingRequest {
    pub address: Option<String>,
    pub opened: Option<bool>,
    pub count_places: Option<i64>,
}

/// Validated input for inserting a parking row
#[derive(Debug, Clone)]
pub struct NewParking {
    pub address: String,
    pub opened: bool,
    pub count_places: i64,
}
