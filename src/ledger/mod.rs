//! Session ledger: clients, parking zones and the check-in/check-out workflow.
//!
//! Every mutation runs inside a single store transaction. Returning early
//! with an error drops the transaction, which rolls back anything written so
//! far, so a failed precondition never leaves a partial effect behind.

mod error;
pub mod validation;

pub use error::LedgerError;

use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use crate::db::store::{clients, parkings, sessions};
use crate::db::{
    Client, ClientParking, ClientParkingRequest, CreateClientRequest, CreateParkingRequest,
    Parking, Store,
};

/// Fixed-width UTC timestamps so the log sorts correctly as text
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Clone)]
pub struct SessionLedger {
    store: Store,
}

impl SessionLedger {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn create_client(&self, req: CreateClientRequest) -> Result<Client, LedgerError> {
        let new_client = validation::validate_new_client(&req).map_err(LedgerError::Validation)?;

        let mut tx = self.store.begin().await?;
        let id = clients::insert(&mut *tx, &new_client).await?;
        let client = clients::find(&mut *tx, id)
            .await?
            .ok_or(LedgerError::NotFound("Client"))?;
        tx.commit().await?;

        info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, LedgerError> {
        Ok(clients::list(self.store.pool()).await?)
    }

    pub async fn get_client(&self, id: i64) -> Result<Client, LedgerError> {
        clients::find(self.store.pool(), id)
            .await?
            .ok_or(LedgerError::NotFound("Client"))
    }

    pub async fn create_parking(&self, req: CreateParkingRequest) -> Result<Parking, LedgerError> {
        let new_parking =
            validation::validate_new_parking(&req).map_err(LedgerError::Validation)?;

        let mut tx = self.store.begin().await?;
        let id = parkings::insert(&mut *tx, &new_parking).await?;
        let parking = parkings::find(&mut *tx, id)
            .await?
            .ok_or(LedgerError::NotFound("Parking"))?;
        tx.commit().await?;

        info!(
            parking_id = parking.id,
            count_places = parking.count_places,
            opened = parking.opened,
            "Parking zone created"
        );
        Ok(parking)
    }

    pub async fn list_parkings(&self) -> Result<Vec<Parking>, LedgerError> {
        Ok(parkings::list(self.store.pool()).await?)
    }

    pub async fn get_parking(&self, id: i64) -> Result<Parking, LedgerError> {
        parkings::find(self.store.pool(), id)
            .await?
            .ok_or(LedgerError::NotFound("Parking"))
    }

    /// Every session log entry, most recent check-in first
    pub async fn list_sessions(&self) -> Result<Vec<ClientParking>, LedgerError> {
        Ok(sessions::list(self.store.pool()).await?)
    }

    /// Park a client's car: open a session and take one free place.
    ///
    /// A pair holds a single log row. A closed row is reopened on the next
    /// check-in; an active one makes the check-in a conflict.
    pub async fn check_in(&self, req: ClientParkingRequest) -> Result<ClientParking, LedgerError> {
        let (client_id, parking_id) =
            validation::validate_session_ids(&req).map_err(LedgerError::Validation)?;

        let mut tx = self.store.begin().await?;

        let client = clients::find(&mut *tx, client_id)
            .await?
            .ok_or(LedgerError::NotFound("Client"))?;
        let parking = parkings::find(&mut *tx, parking_id)
            .await?
            .ok_or(LedgerError::NotFound("Parking"))?;

        if !parking.opened {
            return Err(LedgerError::Precondition("Parking is closed"));
        }
        if !parking.has_available_places() {
            return Err(LedgerError::Precondition("No available places"));
        }

        let time_in = now();
        let log_id = match sessions::find_by_pair(&mut *tx, client.id, parking.id).await? {
            Some(existing) if existing.is_active() => {
                return Err(LedgerError::Conflict(
                    "Car is already checked in at this parking".to_string(),
                ));
            }
            Some(closed) => {
                sessions::reopen(&mut *tx, closed.id, &time_in).await?;
                closed.id
            }
            None => sessions::insert(&mut *tx, client.id, parking.id, &time_in).await?,
        };

        // Guarded decrement, backed by the table's CHECK constraint
        if !parkings::take_place(&mut *tx, parking.id).await? {
            return Err(LedgerError::Precondition("No available places"));
        }

        let entry = sessions::find(&mut *tx, log_id)
            .await?
            .ok_or(LedgerError::NotFound("Parking log"))?;
        tx.commit().await?;

        info!(
            log_id = entry.id,
            client_id = client.id,
            parking_id = parking.id,
            available = parking.count_available_places - 1,
            "Car checked in"
        );
        Ok(entry)
    }

    /// Let a client's car leave: close the active session and free its place.
    ///
    /// Checking out requires a credit card on file. A missing parking row
    /// fails the whole operation and the session stays open.
    pub async fn check_out(&self, req: ClientParkingRequest) -> Result<ClientParking, LedgerError> {
        let (client_id, parking_id) =
            validation::validate_session_ids(&req).map_err(LedgerError::Validation)?;

        let mut tx = self.store.begin().await?;

        let active = sessions::find_active(&mut *tx, client_id, parking_id)
            .await?
            .ok_or(LedgerError::NotFound("Active parking log"))?;

        let client = clients::find(&mut *tx, client_id)
            .await?
            .ok_or(LedgerError::NotFound("Client"))?;
        if !client.has_credit_card() {
            return Err(LedgerError::Precondition(
                "Client has no credit card attached",
            ));
        }

        sessions::close(&mut *tx, active.id, &now()).await?;

        if !parkings::release_place(&mut *tx, parking_id).await? {
            if parkings::find(&mut *tx, parking_id).await?.is_none() {
                return Err(LedgerError::NotFound("Parking"));
            }
            warn!(
                parking_id,
                "Parking already has every place free, leaving counter unchanged"
            );
        }

        let entry = sessions::find(&mut *tx, active.id)
            .await?
            .ok_or(LedgerError::NotFound("Parking log"))?;
        tx.commit().await?;

        info!(
            log_id = entry.id,
            client_id,
            parking_id,
            "Car checked out"
        );
        Ok(entry)
    }
}
