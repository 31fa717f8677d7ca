pub mod api;
pub mod config;
pub mod db;
pub mod ledger;

pub use db::DbPool;

use config::Config;

use crate::db::Store;
use crate::ledger::SessionLedger;

pub struct AppState {
    pub config: Config,
    pub ledger: SessionLedger,
}

impl AppState {
    pub fn new(config: Config, db: DbPool) -> Self {
        Self {
            config,
            ledger: SessionLedger::new(Store::new(db)),
        }
    }
}
