//! Record store: owns the pool and hands out one transaction per ledger operation.
//!
//! Query functions in the submodules accept any SQLite executor, so the same
//! query runs against the pool for plain reads or against `&mut *tx` inside
//! a transaction.

pub mod clients;
pub mod parkings;
pub mod sessions;

use sqlx::{Sqlite, Transaction};

use crate::DbPool;

#[derive(Debug, Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Start a write transaction; dropping it without `commit` rolls back.
    ///
    /// `BEGIN IMMEDIATE` takes the database write lock up front, so the
    /// reads that precede a write see every earlier commit and concurrent
    /// writers queue on the busy timeout instead of failing to upgrade a
    /// read lock.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }
}
