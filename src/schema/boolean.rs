//! Boolean validation.

use super::presence::{Presence, presence_builders};
use super::result::ValidationResult;
use super::validator::Validate;
use super::value::{Value, ValueKind};

/// Validates boolean values.
///
/// Only real booleans pass; `1`, `"true"`, and other truthy values are
/// type mismatches.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    presence: Presence,
}

presence_builders!(BooleanValidator);

impl BooleanValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Validate for BooleanValidator {
    fn validate(&self, value: &Value) -> ValidationResult {
        self.presence.check(value, |present| match present {
            Value::Bool(_) => ValidationResult::valid(),
            other => self
                .presence
                .type_mismatch(ValueKind::Boolean, other.kind()),
        })
    }
}
