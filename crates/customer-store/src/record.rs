use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CustomerId;

/// Version number of a customer record, used for optimistic concurrency
/// and auditing.
///
/// Versions start at 1 when a record is inserted and increase by 1 on
/// every successful mutation. Only the store's write path assigns them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(i64);

impl Version {
    /// Creates a version from a raw value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the version assigned to a freshly inserted record (1).
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next version.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw version value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Version {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// The business-supplied fields of a customer record.
///
/// This is the payload a caller hands to the store on insert and update.
/// Identity, version, and timestamps are never part of it; those belong
/// to the store's write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
}

impl CustomerFields {
    /// Creates a field set from the five business-supplied values.
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
}

/// A persisted customer record.
///
/// `customer_id` and `created_time` are immutable once assigned.
/// `version` and `last_modified_time` are owned exclusively by the
/// store's write path; callers read back whatever the store returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
    pub version: Version,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl Customer {
    /// Builds the record an insert persists: version 1, both timestamps
    /// set to the same instant.
    pub fn inserted(customer_id: CustomerId, fields: CustomerFields, at: DateTime<Utc>) -> Self {
        Self {
            customer_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            national_id: fields.national_id,
            phone_number: fields.phone_number,
            account_id: fields.account_id,
            version: Version::first(),
            created_time: at,
            last_modified_time: at,
        }
    }

    /// Builds the record an update persists: fields replaced, version
    /// bumped, modification time refreshed, creation time untouched.
    pub fn updated(&self, fields: CustomerFields, at: DateTime<Utc>) -> Self {
        Self {
            customer_id: self.customer_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            national_id: fields.national_id,
            phone_number: fields.phone_number,
            account_id: fields.account_id,
            version: self.version.next(),
            created_time: self.created_time,
            last_modified_time: at,
        }
    }

    /// Returns a copy of the business-supplied fields.
    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            national_id: self.national_id.clone(),
            phone_number: self.phone_number.clone(),
            account_id: self.account_id.clone(),
        }
    }
}
