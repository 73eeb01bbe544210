//! Settings shared by every validator variant: optionality and the custom
//! message override.
//!
//! [`Presence`] decides what happens to an absent value before any
//! variant-specific check runs, and formats the validator's own
//! type-mismatch message.

use super::result::ValidationResult;
use super::value::{Value, ValueKind};

/// Message reported for an absent value when no override is configured.
pub(crate) const REQUIRED_MESSAGE: &str = "Value is required";

/// Optionality and message override carried by each validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Presence {
    pub(crate) optional: bool,
    pub(crate) message: Option<String>,
}

impl Presence {
    /// Runs `check` on a present value, or resolves an absent one.
    ///
    /// Absent values pass when optional and otherwise yield exactly one
    /// error; `check` never sees them.
    pub(crate) fn check<F>(&self, value: &Value, check: F) -> ValidationResult
    where
        F: FnOnce(&Value) -> ValidationResult,
    {
        if !value.is_absent() {
            return check(value);
        }
        if self.optional {
            return ValidationResult::valid();
        }
        ValidationResult::failure(self.message.as_deref().unwrap_or(REQUIRED_MESSAGE))
    }

    /// The single error reported when `actual` is not the `expected` kind.
    pub(crate) fn type_mismatch(&self, expected: ValueKind, actual: ValueKind) -> ValidationResult {
        self.message.as_ref().map_or_else(
            || ValidationResult::failure(format!("Expected {expected}, got {actual}")),
            |message| ValidationResult::failure(message.as_str()),
        )
    }
}

/// Adds the chainable `optional` / `with_message` builders and their
/// accessors to a validator struct with a `presence: Presence` field.
macro_rules! presence_builders {
    ($validator:ty) => {
        impl $validator {
            /// Allows the value to be absent; an absent value then passes
            /// without further checks.
            #[must_use]
            pub const fn optional(mut self) -> Self {
                self.presence.optional = true;
                self
            }

            /// Replaces this validator's own type-mismatch and "required"
            /// messages with `message`.
            ///
            /// Constraint messages and errors raised by child validators
            /// are left untouched.
            #[must_use]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.presence.message = Some(message.into());
                self
            }

            /// Returns `true` when an absent value is accepted.
            #[must_use]
            pub const fn is_optional(&self) -> bool {
                self.presence.optional
            }

            /// Returns the configured message override, if any.
            #[must_use]
            pub fn message(&self) -> Option<&str> {
                self.presence.message.as_deref()
            }
        }
    };
}

pub(crate) use presence_builders;
