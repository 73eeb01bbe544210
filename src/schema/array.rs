//! Homogeneous array validation.

use tracing::trace;

use super::presence::{Presence, presence_builders};
use super::result::ValidationResult;
use super::validator::{Validate, Validator};
use super::value::{Value, ValueKind};

/// Validates arrays whose every element satisfies one item validator.
///
/// After the type check, length bounds are checked and then every element
/// is validated in index order. Element failures never stop the scan; each
/// child error is prefixed with `Item at index <i>: `.
///
/// # Examples
///
///     use shapecheck::schema::{Validate, Value, array, string};
///
///     let tags = array(string()).min_length(1).max_length(5);
///     let result = tags.validate(&Value::Array(vec!["python".into(), 123.into()]));
///     assert_eq!(
///         result.errors(),
///         ["Item at index 1: Expected string, got number"]
///     );
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    presence: Presence,
    item_validator: Box<Validator>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

presence_builders!(ArrayValidator);

impl ArrayValidator {
    pub(crate) fn new(item_validator: Validator) -> Self {
        Self {
            presence: Presence::default(),
            item_validator: Box::new(item_validator),
            min_length: None,
            max_length: None,
        }
    }

    /// Requires at least `length` items.
    #[must_use]
    pub const fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Allows at most `length` items.
    #[must_use]
    pub const fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Returns the validator applied to every element.
    #[must_use]
    pub fn item_validator(&self) -> &Validator {
        &self.item_validator
    }

    /// Returns the configured minimum item count.
    #[must_use]
    pub const fn min_length_bound(&self) -> Option<usize> {
        self.min_length
    }

    /// Returns the configured maximum item count.
    #[must_use]
    pub const fn max_length_bound(&self) -> Option<usize> {
        self.max_length
    }

    fn check(&self, value: &Value) -> ValidationResult {
        let Value::Array(items) = value else {
            return self.presence.type_mismatch(ValueKind::Array, value.kind());
        };

        let mut errors = Vec::new();
        if let Some(min) = self.min_length.filter(|min| items.len() < *min) {
            errors.push(format!("Array must have at least {min} items"));
        }
        if let Some(max) = self.max_length.filter(|max| items.len() > *max) {
            errors.push(format!("Array must have at most {max} items"));
        }
        for (index, item) in items.iter().enumerate() {
            let result = self.item_validator.validate(item);
            if result.is_valid() {
                continue;
            }
            trace!(index, error_count = result.errors().len(), "array item failed validation");
            errors.extend(
                result
                    .into_errors()
                    .into_iter()
                    .map(|error| format!("Item at index {index}: {error}")),
            );
        }
        ValidationResult::from_errors(errors)
    }
}

impl Validate for ArrayValidator {
    fn validate(&self, value: &Value) -> ValidationResult {
        self.presence.check(value, |present| self.check(present))
    }
}
