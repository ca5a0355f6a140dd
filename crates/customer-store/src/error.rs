use thiserror::Error;

use crate::CustomerId;

/// Errors that can occur when interacting with the customer store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the given identifier.
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Returns true when the error means the identifier had no matching
    /// record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for customer store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
