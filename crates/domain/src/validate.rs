//! Create-request validation.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::request::CreateRequest;

/// A format check plugged in per deployment. Returns true when the value is
/// acceptable.
pub type FormatPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single failed check on one request field.
///
/// Field names use the wire spelling so the transport layer can report them
/// to callers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    fn empty(field: &'static str) -> Self {
        Self {
            field,
            reason: "must not be empty".to_string(),
        }
    }

    fn bad_format(field: &'static str) -> Self {
        Self {
            field,
            reason: "does not match the expected format".to_string(),
        }
    }
}

/// Outcome of a failed validation: every violated field at once, so a caller
/// can fix all problems in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Validation failed: {}", violated_fields(.violations))]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Returns the names of the violated fields, in request-field order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn violated_fields(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates create requests.
///
/// Every field must be non-empty. Format checks for `nationalId` and
/// `phoneNumber` are deployment-specific and plugged in at construction;
/// without them only the emptiness checks apply. Pure and deterministic:
/// no I/O, no side effects.
#[derive(Clone, Default)]
pub struct RequestValidator {
    national_id_format: Option<FormatPredicate>,
    phone_number_format: Option<FormatPredicate>,
}

impl RequestValidator {
    /// Creates a validator with only the required-field checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a format check for `nationalId`.
    pub fn with_national_id_format(
        mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.national_id_format = Some(Arc::new(predicate));
        self
    }

    /// Adds a format check for `phoneNumber`.
    pub fn with_phone_number_format(
        mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.phone_number_format = Some(Arc::new(predicate));
        self
    }

    /// Checks a create request, reporting all violations at once.
    pub fn validate(&self, request: &CreateRequest) -> Result<(), ValidationFailure> {
        let mut violations = Vec::new();

        check_non_empty(&mut violations, "firstName", &request.first_name);
        check_non_empty(&mut violations, "lastName", &request.last_name);
        check_format(
            &mut violations,
            "nationalId",
            &request.national_id,
            self.national_id_format.as_deref(),
        );
        check_format(
            &mut violations,
            "phoneNumber",
            &request.phone_number,
            self.phone_number_format.as_deref(),
        );
        check_non_empty(&mut violations, "accountId", &request.account_id);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { violations })
        }
    }
}

fn check_non_empty(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str) {
    if value.is_empty() {
        violations.push(FieldViolation::empty(field));
    }
}

// An empty value reports only the emptiness violation; format checks apply
// to present values.
fn check_format(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    format: Option<&(dyn Fn(&str) -> bool + Send + Sync)>,
) {
    if value.is_empty() {
        violations.push(FieldViolation::empty(field));
    } else if let Some(accepts) = format {
        if !accepts(value) {
            violations.push(FieldViolation::bad_format(field));
        }
    }
}

impl fmt::Debug for RequestValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestValidator")
            .field("national_id_format", &self.national_id_format.is_some())
            .field("phone_number_format", &self.phone_number_format.is_some())
            .finish()
    }
}
