//! Client models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub credit_card: Option<String>,
    pub car_number: Option<String>,
}

impl Client {
    /// A client can only be billed (and so leave a parking) with a card on file
    pub fn has_credit_card(&self) -> bool {
        self.credit_card
            .as_deref()
            .is_some_and(|card| !card.trim().is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub credit_card: Option<String>,
    pub car_number: Option<String>,
}

/// Validated input for inserting a client row
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub credit_card: Option<String>,
    pub car_number: Option<String>,
}
