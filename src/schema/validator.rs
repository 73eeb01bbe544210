//! The validation contract and the tagged union over validator variants.

use tracing::debug;

use super::array::ArrayValidator;
use super::boolean::BooleanValidator;
use super::error::ValidationError;
use super::number::NumberValidator;
use super::object::ObjectValidator;
use super::result::ValidationResult;
use super::string::StringValidator;
use super::value::{Value, ValueKind};

/// Checks values against a configured rule set.
///
/// Implementations never mutate their configuration while validating, so a
/// finished validator can be shared freely, including across threads.
pub trait Validate {
    /// Validates `value`, collecting every failure into the result.
    ///
    /// An absent value ([`Value::Null`]) passes when the validator is
    /// optional and otherwise fails with a single "required" error. This
    /// method never panics and never fails; all outcomes are reported
    /// through the returned [`ValidationResult`].
    fn validate(&self, value: &Value) -> ValidationResult;

    /// Returns `value` unchanged when it is valid.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying exactly the errors that
    /// [`Validate::validate`] reports for the same value.
    fn parse(&self, value: Value) -> Result<Value, ValidationError> {
        let result = self.validate(&value);
        if result.is_valid() {
            return Ok(value);
        }
        let errors = result.into_errors();
        debug!(error_count = errors.len(), "value failed validation");
        Err(ValidationError::new(errors))
    }
}

/// Any validator variant.
///
/// Composite validators hold their children as `Validator`, which lets
/// arrays and objects nest to arbitrary depth. Children are owned, so a
/// schema is always a finite tree.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Checks strings.
    String(StringValidator),
    /// Checks integral and fractional numbers.
    Number(NumberValidator),
    /// Checks booleans.
    Boolean(BooleanValidator),
    /// Checks homogeneous arrays.
    Array(ArrayValidator),
    /// Checks keyed mappings against a field schema.
    Object(ObjectValidator),
}

impl Validator {
    /// Allows the value to be absent.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::String(v) => Self::String(v.optional()),
            Self::Number(v) => Self::Number(v.optional()),
            Self::Boolean(v) => Self::Boolean(v.optional()),
            Self::Array(v) => Self::Array(v.optional()),
            Self::Object(v) => Self::Object(v.optional()),
        }
    }

    /// Replaces the variant's own type-mismatch and "required" messages.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::String(v) => Self::String(v.with_message(message)),
            Self::Number(v) => Self::Number(v.with_message(message)),
            Self::Boolean(v) => Self::Boolean(v.with_message(message)),
            Self::Array(v) => Self::Array(v.with_message(message)),
            Self::Object(v) => Self::Object(v.with_message(message)),
        }
    }

    /// Returns `true` when an absent value is accepted.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        match self {
            Self::String(v) => v.is_optional(),
            Self::Number(v) => v.is_optional(),
            Self::Boolean(v) => v.is_optional(),
            Self::Array(v) => v.is_optional(),
            Self::Object(v) => v.is_optional(),
        }
    }

    /// Returns the value kind this validator accepts.
    #[must_use]
    pub const fn expected_kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Map,
        }
    }
}

impl Validate for Validator {
    fn validate(&self, value: &Value) -> ValidationResult {
        match self {
            Self::String(v) => v.validate(value),
            Self::Number(v) => v.validate(value),
            Self::Boolean(v) => v.validate(value),
            Self::Array(v) => v.validate(value),
            Self::Object(v) => v.validate(value),
        }
    }
}

impl From<StringValidator> for Validator {
    fn from(v: StringValidator) -> Self {
        Self::String(v)
    }
}

impl From<NumberValidator> for Validator {
    fn from(v: NumberValidator) -> Self {
        Self::Number(v)
    }
}

impl From<BooleanValidator> for Validator {
    fn from(v: BooleanValidator) -> Self {
        Self::Boolean(v)
    }
}

impl From<ArrayValidator> for Validator {
    fn from(v: ArrayValidator) -> Self {
        Self::Array(v)
    }
}

impl From<ObjectValidator> for Validator {
    fn from(v: ObjectValidator) -> Self {
        Self::Object(v)
    }
}
