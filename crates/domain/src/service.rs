//! Customer workflows composing the validator, identity provider, store,
//! and publisher.

use common::CustomerId;
use customer_store::{Customer, CustomerQuery, CustomerStore};
use messaging::{CustomerEvent, EventPublisher};

use crate::error::DomainError;
use crate::identity::{IdentityProvider, UuidIdentity};
use crate::request::{CreateRequest, UpdateRequest};
use crate::validate::RequestValidator;

/// Service providing the customer record operations.
///
/// All collaborators are wired in at construction; the service itself holds
/// no other state, so every call is independent and safe to run
/// concurrently. For each mutation the ordering is fixed: the storage write
/// happens first and the event publish second, both only on the success
/// path. Publishing is best-effort and can never fail a workflow.
pub struct CustomerService<S, P, I = UuidIdentity> {
    store: S,
    publisher: P,
    identity: I,
    validator: RequestValidator,
}

impl<S, P> CustomerService<S, P>
where
    S: CustomerStore,
    P: EventPublisher,
{
    /// Creates a service with the default identity provider.
    pub fn new(store: S, publisher: P) -> Self {
        Self::with_identity(store, publisher, UuidIdentity)
    }
}

impl<S, P, I> CustomerService<S, P, I>
where
    S: CustomerStore,
    P: EventPublisher,
    I: IdentityProvider,
{
    /// Creates a service with an explicit identity provider.
    pub fn with_identity(store: S, publisher: P, identity: I) -> Self {
        Self {
            store,
            publisher,
            identity,
            validator: RequestValidator::new(),
        }
    }

    /// Replaces the default validator, keeping the rest of the wiring.
    pub fn with_validator(mut self, validator: RequestValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a new customer record.
    ///
    /// Validates the request first; on failure nothing else runs — no
    /// identifier is generated, no storage call is made, no event is
    /// published. On success the persisted record is returned exactly as
    /// the store produced it, with its assigned identifier, version, and
    /// timestamps.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, request: CreateRequest) -> Result<Customer, DomainError> {
        if let Err(failure) = self.validator.validate(&request) {
            metrics::counter!("customer_validation_failures_total").increment(1);
            tracing::warn!(fields = ?failure.fields(), "Create request rejected");
            return Err(failure.into());
        }

        let customer_id = self.identity.generate();
        let customer = self.store.insert(customer_id, request.into_fields()).await?;

        self.publisher
            .publish(CustomerEvent::added(customer.customer_id));
        metrics::counter!("customer_created_total").increment(1);
        tracing::info!(customer_id = %customer.customer_id, "Customer created");
        Ok(customer)
    }

    /// Retrieves a single customer by identifier.
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_one(&self, customer_id: CustomerId) -> Result<Customer, DomainError> {
        let customer = self.store.retrieve(customer_id).await?;
        Ok(customer)
    }

    /// Retrieves every customer matching the query.
    ///
    /// The query is forwarded to the store unmodified; no match is an empty
    /// list, never an error.
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_multi(&self, query: CustomerQuery) -> Result<Vec<Customer>, DomainError> {
        let customers = self.store.retrieve_many(query).await?;
        tracing::debug!(count = customers.len(), "Retrieved customers");
        Ok(customers)
    }

    /// Updates an existing customer record.
    ///
    /// Validation is create-only: the supplied fields are written as-is.
    /// The store assigns the new version and modification time; an unknown
    /// identifier propagates as not-found without publishing.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, request: UpdateRequest) -> Result<Customer, DomainError> {
        let customer_id = request.customer_id;
        let customer = self.store.update(customer_id, request.into_fields()).await?;

        self.publisher
            .publish(CustomerEvent::updated(customer.customer_id));
        metrics::counter!("customer_updated_total").increment(1);
        tracing::info!(
            customer_id = %customer.customer_id,
            version = customer.version.as_i64(),
            "Customer updated"
        );
        Ok(customer)
    }

    /// Removes a customer record permanently.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, customer_id: CustomerId) -> Result<(), DomainError> {
        self.store.remove(customer_id).await?;

        self.publisher.publish(CustomerEvent::removed(customer_id));
        metrics::counter!("customer_removed_total").increment(1);
        tracing::info!(%customer_id, "Customer removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use customer_store::{CustomerFields, InMemoryCustomerStore, StoreError, Version};
    use messaging::queue;

    use crate::identity::FixedIdentity;

    /// Store wrapper that counts calls to the write path.
    #[derive(Clone, Default)]
    struct RecordingStore {
        inner: InMemoryCustomerStore,
        inserts: Arc<AtomicUsize>,
        updates: Arc<AtomicUsize>,
        removes: Arc<AtomicUsize>,
    }

    impl RecordingStore {
        fn insert_count(&self) -> usize {
            self.inserts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CustomerStore for RecordingStore {
        async fn insert(
            &self,
            customer_id: CustomerId,
            fields: CustomerFields,
        ) -> Result<Customer, StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.inner.insert(customer_id, fields).await
        }

        async fn retrieve(&self, customer_id: CustomerId) -> Result<Customer, StoreError> {
            self.inner.retrieve(customer_id).await
        }

        async fn retrieve_many(&self, query: CustomerQuery) -> Result<Vec<Customer>, StoreError> {
            self.inner.retrieve_many(query).await
        }

        async fn update(
            &self,
            customer_id: CustomerId,
            fields: CustomerFields,
        ) -> Result<Customer, StoreError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.update(customer_id, fields).await
        }

        async fn remove(&self, customer_id: CustomerId) -> Result<(), StoreError> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(customer_id).await
        }
    }

    fn create_request() -> CreateRequest {
        CreateRequest::new("Ama", "Owusu", "GHA-123", "+233500000000", "ACC-1")
    }

    #[tokio::test]
    async fn create_returns_the_persisted_record() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let customer = service.create(create_request()).await.unwrap();

        assert_eq!(customer.first_name, "Ama");
        assert_eq!(customer.last_name, "Owusu");
        assert_eq!(customer.national_id, "GHA-123");
        assert_eq!(customer.phone_number, "+233500000000");
        assert_eq!(customer.account_id, "ACC-1");
        assert_eq!(customer.version, Version::first());
        assert_eq!(customer.created_time, customer.last_modified_time);
    }

    #[tokio::test]
    async fn create_assigns_the_generated_identifier() {
        let (publisher, _rx) = queue();
        let id = CustomerId::new();
        let service = CustomerService::with_identity(
            InMemoryCustomerStore::new(),
            publisher,
            FixedIdentity::new(id),
        );

        let customer = service.create(create_request()).await.unwrap();
        assert_eq!(customer.customer_id, id);
    }

    #[tokio::test]
    async fn create_publishes_an_added_event_after_the_write() {
        let (publisher, mut rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let customer = service.create(create_request()).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "CustomerAdded");
        assert_eq!(event.customer_id(), customer.customer_id);
    }

    #[tokio::test]
    async fn invalid_create_reports_every_missing_field() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let request = CreateRequest::new("", "", "", "", "");
        let err = service.create(request).await.unwrap_err();

        match err {
            DomainError::Validation(failure) => {
                assert_eq!(failure.violations.len(), 5);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_create_touches_neither_store_nor_publisher() {
        let (publisher, mut rx) = queue();
        let store = RecordingStore::default();
        let service = CustomerService::new(store.clone(), publisher);

        let request = CreateRequest::new("Ama", "", "GHA-123", "", "ACC-1");
        service.create(request).await.unwrap_err();

        assert_eq!(store.insert_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn create_applies_the_configured_format_checks() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher)
            .with_validator(
                RequestValidator::new().with_phone_number_format(|p| p.starts_with('+')),
            );

        let mut request = create_request();
        request.phone_number = "0500000000".to_string();

        let err = service.create(request).await.unwrap_err();
        match err {
            DomainError::Validation(failure) => assert_eq!(failure.fields(), vec!["phoneNumber"]),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn retrieve_one_returns_the_stored_record() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        let retrieved = service.retrieve_one(created.customer_id).await.unwrap();

        assert_eq!(retrieved, created);
    }

    #[tokio::test]
    async fn retrieve_one_propagates_not_found() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let err = service.retrieve_one(CustomerId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn retrieve_multi_with_default_query_returns_all() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        service.create(create_request()).await.unwrap();
        service
            .create(CreateRequest::new(
                "Kofi",
                "Mensah",
                "GHA-456",
                "+233511111111",
                "ACC-2",
            ))
            .await
            .unwrap();

        let customers = service.retrieve_multi(CustomerQuery::all()).await.unwrap();
        assert_eq!(customers.len(), 2);
    }

    #[tokio::test]
    async fn retrieve_multi_on_an_empty_store_returns_an_empty_list() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let customers = service.retrieve_multi(CustomerQuery::all()).await.unwrap();
        assert!(customers.is_empty());
    }

    #[tokio::test]
    async fn update_bumps_version_and_preserves_created_time() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        let request = UpdateRequest::new(
            created.customer_id,
            "Ama",
            "Owusu",
            "GHA-123",
            "+233599999999",
            "ACC-1",
        );

        let updated = service.update(request).await.unwrap();

        assert_eq!(updated.phone_number, "+233599999999");
        assert_eq!(updated.version, Version::new(2));
        assert_eq!(updated.created_time, created.created_time);
    }

    #[tokio::test]
    async fn update_publishes_an_updated_event() {
        let (publisher, mut rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        rx.recv().await.unwrap();

        let request = UpdateRequest::new(
            created.customer_id,
            "Ama",
            "Owusu",
            "GHA-123",
            "+233599999999",
            "ACC-1",
        );
        service.update(request).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "CustomerUpdated");
        assert_eq!(event.customer_id(), created.customer_id);
    }

    // Pins the observed contract: only create requests are validated, so an
    // update writes whatever it is given.
    #[tokio::test]
    async fn update_applies_no_validation() {
        let (publisher, _rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        let request = UpdateRequest::new(created.customer_id, "", "", "", "", "");

        let updated = service.update(request).await.unwrap();
        assert_eq!(updated.first_name, "");
        assert_eq!(updated.version, Version::new(2));
    }

    #[tokio::test]
    async fn update_of_a_missing_record_publishes_nothing() {
        let (publisher, mut rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let request = UpdateRequest::new(
            CustomerId::new(),
            "Ama",
            "Owusu",
            "GHA-123",
            "+233599999999",
            "ACC-1",
        );

        let err = service.update(request).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn remove_deletes_the_record_and_publishes() {
        let (publisher, mut rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        rx.recv().await.unwrap();

        service.remove(created.customer_id).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "CustomerRemoved");
        assert_eq!(event.customer_id(), created.customer_id);

        let err = service.retrieve_one(created.customer_id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn remove_of_a_missing_record_publishes_nothing() {
        let (publisher, mut rx) = queue();
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let err = service.remove(CustomerId::new()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn mutations_succeed_with_no_subscriber_attached() {
        let (publisher, rx) = queue();
        drop(rx);
        let service = CustomerService::new(InMemoryCustomerStore::new(), publisher);

        let created = service.create(create_request()).await.unwrap();
        service.remove(created.customer_id).await.unwrap();
    }
}
