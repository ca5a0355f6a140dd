use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

/// Domain events emitted after a customer record mutation has been stored.
///
/// Events are notifications, not commands: they carry the identity of the
/// affected record and the time the mutation was observed, and downstream
/// consumers look up current state themselves if they need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    CustomerAdded {
        customer_id: CustomerId,
        occurred_at: DateTime<Utc>,
    },
    CustomerUpdated {
        customer_id: CustomerId,
        occurred_at: DateTime<Utc>,
    },
    CustomerRemoved {
        customer_id: CustomerId,
        occurred_at: DateTime<Utc>,
    },
}

impl CustomerEvent {
    pub fn added(customer_id: CustomerId) -> Self {
        Self::CustomerAdded {
            customer_id,
            occurred_at: Utc::now(),
        }
    }

    pub fn updated(customer_id: CustomerId) -> Self {
        Self::CustomerUpdated {
            customer_id,
            occurred_at: Utc::now(),
        }
    }

    pub fn removed(customer_id: CustomerId) -> Self {
        Self::CustomerRemoved {
            customer_id,
            occurred_at: Utc::now(),
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CustomerAdded { .. } => "CustomerAdded",
            Self::CustomerUpdated { .. } => "CustomerUpdated",
            Self::CustomerRemoved { .. } => "CustomerRemoved",
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        match self {
            Self::CustomerAdded { customer_id, .. }
            | Self::CustomerUpdated { customer_id, .. }
            | Self::CustomerRemoved { customer_id, .. } => *customer_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::CustomerAdded { occurred_at, .. }
            | Self::CustomerUpdated { occurred_at, .. }
            | Self::CustomerRemoved { occurred_at, .. } => *occurred_at,
        }
    }
}
