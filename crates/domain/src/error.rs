//! Workflow error types.

use customer_store::StoreError;
use thiserror::Error;

use crate::validate::ValidationFailure;

/// Errors surfaced by the customer workflows.
///
/// Failures pass through unchanged: workflows perform no retries and no
/// local recovery, leaving user-facing representation to the transport
/// layer. Publish failures are absorbed by the publisher and never appear
/// here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The create request failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The storage backend reported a failure, including unknown identifiers.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Returns true if this failure means the identifier has no record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CustomerId;

    #[test]
    fn not_found_store_errors_are_recognized() {
        let err = DomainError::from(StoreError::NotFound(CustomerId::new()));
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_failures_are_not_not_found() {
        let failure = ValidationFailure {
            violations: vec![crate::validate::FieldViolation {
                field: "firstName",
                reason: "must not be empty".to_string(),
            }],
        };
        assert!(!DomainError::from(failure).is_not_found());
    }
}
