pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod record;
pub mod store;

pub use common::CustomerId;
pub use error::{Result, StoreError};
pub use memory::InMemoryCustomerStore;
pub use postgres::PostgresCustomerStore;
pub use query::CustomerQuery;
pub use record::{Customer, CustomerFields, Version};
pub use store::CustomerStore;
