use async_trait::async_trait;

use crate::{Customer, CustomerFields, CustomerId, CustomerQuery, Result};

/// Core trait for customer store implementations.
///
/// A store persists customer records keyed by identifier. All
/// implementations must be safe for concurrent use (Send + Sync); the
/// workflow layer adds no locking of its own.
///
/// The store's write path is the sole owner of `version`, `created_time`,
/// and `last_modified_time`: `insert` assigns version 1 with both
/// timestamps equal, `update` bumps the version and refreshes the
/// modification time while preserving the creation time. Callers never
/// supply those values.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Inserts a new record under the given identifier and returns the
    /// record exactly as persisted.
    async fn insert(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer>;

    /// Retrieves the record for the given identifier.
    ///
    /// Fails with `StoreError::NotFound` when no record matches.
    async fn retrieve(&self, customer_id: CustomerId) -> Result<Customer>;

    /// Retrieves every record matching the query.
    ///
    /// A query with no criteria matches every record. No match is
    /// `Ok(vec![])`, not an error.
    async fn retrieve_many(&self, query: CustomerQuery) -> Result<Vec<Customer>>;

    /// Replaces the business fields of an existing record and returns the
    /// record exactly as persisted.
    ///
    /// Fails with `StoreError::NotFound` when no record matches.
    async fn update(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer>;

    /// Permanently removes the record for the given identifier.
    ///
    /// Fails with `StoreError::NotFound` when no record matches.
    async fn remove(&self, customer_id: CustomerId) -> Result<()>;
}
