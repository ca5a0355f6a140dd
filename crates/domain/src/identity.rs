//! Identifier generation for new customer records.

use common::CustomerId;

/// Produces the identifier assigned to a customer at creation.
///
/// Generation never fails. Implementations must be substitutable so
/// orchestration tests can pin the identifier a workflow will assign.
pub trait IdentityProvider: Send + Sync {
    fn generate(&self) -> CustomerId;
}

/// Default provider: a fresh random v4 UUID per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdentity;

impl IdentityProvider for UuidIdentity {
    fn generate(&self) -> CustomerId {
        CustomerId::new()
    }
}

/// Provider that always yields the same identifier. For tests that need to
/// know the id a create will assign before calling it.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentity(CustomerId);

impl FixedIdentity {
    pub fn new(customer_id: CustomerId) -> Self {
        Self(customer_id)
    }
}

impl IdentityProvider for FixedIdentity {
    fn generate(&self) -> CustomerId {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_identity_generates_unique_v4_ids() {
        let provider = UuidIdentity;
        let a = provider.generate();
        let b = provider.generate();

        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn fixed_identity_always_returns_the_same_id() {
        let id = CustomerId::new();
        let provider = FixedIdentity::new(id);

        assert_eq!(provider.generate(), id);
        assert_eq!(provider.generate(), id);
    }
}
