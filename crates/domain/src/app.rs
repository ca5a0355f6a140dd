//! Application assemblies.
//!
//! Wiring happens once, at construction: each assembly picks a storage
//! backend, pairs it with the in-process event queue, and returns the
//! service plus the queue's consumer handle. Workflows never branch on the
//! backend at runtime; one assembly serves a whole process.

use customer_store::{InMemoryCustomerStore, PostgresCustomerStore};
use messaging::{EventReceiver, QueuePublisher, queue};
use sqlx::PgPool;

use crate::service::CustomerService;

/// Assembles a service backed by the in-memory store.
pub fn in_memory() -> (
    CustomerService<InMemoryCustomerStore, QueuePublisher>,
    EventReceiver,
) {
    let (publisher, receiver) = queue();
    let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);
    (service, receiver)
}

/// Assembles a service backed by Postgres.
///
/// The caller owns the pool and is expected to have run migrations.
pub fn postgres(
    pool: PgPool,
) -> (
    CustomerService<PostgresCustomerStore, QueuePublisher>,
    EventReceiver,
) {
    let (publisher, receiver) = queue();
    let service = CustomerService::new(PostgresCustomerStore::new(pool), publisher);
    (service, receiver)
}
