//! Transient request values carried into the workflows.

use common::CustomerId;
use customer_store::CustomerFields;

/// Request to create a new customer record.
///
/// Carries the business-supplied fields only; the identifier is generated by
/// the workflow and the bookkeeping columns are assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
}

impl CreateRequest {
    /// Creates a new CreateRequest.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
        phone_number: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
            phone_number: phone_number.into(),
            account_id: account_id.into(),
        }
    }

    /// Converts the request into the field set handed to the store.
    pub fn into_fields(self) -> CustomerFields {
        CustomerFields::new(
            self.first_name,
            self.last_name,
            self.national_id,
            self.phone_number,
            self.account_id,
        )
    }
}

/// Request to update an existing customer record.
///
/// Identifies the target by `customer_id` and carries the full replacement
/// value for every mutable field.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// The record to update.
    pub customer_id: CustomerId,

    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
}

impl UpdateRequest {
    /// Creates a new UpdateRequest.
    pub fn new(
        customer_id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
        phone_number: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
            phone_number: phone_number.into(),
            account_id: account_id.into(),
        }
    }

    /// Converts the request into the field set handed to the store.
    pub fn into_fields(self) -> CustomerFields {
        CustomerFields::new(
            self.first_name,
            self.last_name,
            self.national_id,
            self.phone_number,
            self.account_id,
        )
    }
}
