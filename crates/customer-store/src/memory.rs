use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    Customer, CustomerFields, CustomerId, CustomerQuery, Result, StoreError,
    store::CustomerStore,
};

/// In-memory customer store backed by a guarded process-wide map.
///
/// Cloning is cheap and every clone shares the same records. The internal
/// lock makes it safe for concurrent use; it provides the same interface
/// and write-path ownership rules as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    records: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records stored.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clears all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer> {
        let customer = Customer::inserted(customer_id, fields, Utc::now());
        let mut records = self.records.write().await;
        records.insert(customer_id, customer.clone());
        Ok(customer)
    }

    async fn retrieve(&self, customer_id: CustomerId) -> Result<Customer> {
        let records = self.records.read().await;
        records
            .get(&customer_id)
            .cloned()
            .ok_or(StoreError::NotFound(customer_id))
    }

    async fn retrieve_many(&self, _query: CustomerQuery) -> Result<Vec<Customer>> {
        let records = self.records.read().await;
        let mut customers: Vec<_> = records.values().cloned().collect();
        customers.sort_by(|a, b| {
            a.created_time
                .cmp(&b.created_time)
                .then(a.customer_id.as_uuid().cmp(&b.customer_id.as_uuid()))
        });
        Ok(customers)
    }

    async fn update(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer> {
        let mut records = self.records.write().await;
        let current = records
            .get(&customer_id)
            .ok_or(StoreError::NotFound(customer_id))?;
        let updated = current.updated(fields, Utc::now());
        records.insert(customer_id, updated.clone());
        Ok(updated)
    }

    async fn remove(&self, customer_id: CustomerId) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .remove(&customer_id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(customer_id))
    }
}
