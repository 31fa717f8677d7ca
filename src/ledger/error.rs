//! Session ledger errors.

use sqlx::{
    error::{DatabaseError, ErrorKind},
    Error,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A business rule rejected the operation
    #[error("{0}")]
    Precondition(&'static str),

    /// The operation clashes with the current state of a record
    #[error("{0}")]
    Conflict(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for LedgerError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound("Record");
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => {
                Self::Conflict("A record with this identifier already exists".to_string())
            }
            Some(ErrorKind::ForeignKeyViolation) => {
                Self::Validation("Referenced record does not exist".to_string())
            }
            Some(ErrorKind::CheckViolation) => Self::Validation("Invalid data".to_string()),
            _ => Self::Sql(error),
        }
    }
}
