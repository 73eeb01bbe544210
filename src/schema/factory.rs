//! Entry points that create fresh, independently configurable validators.

use super::array::ArrayValidator;
use super::boolean::BooleanValidator;
use super::number::NumberValidator;
use super::object::ObjectValidator;
use super::string::StringValidator;
use super::validator::Validator;

/// Creates a string validator with no constraints.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// Creates a number validator with no bounds.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// Creates a boolean validator.
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// Creates an array validator that applies `item_validator` to every
/// element.
#[must_use]
pub fn array(item_validator: impl Into<Validator>) -> ArrayValidator {
    ArrayValidator::new(item_validator.into())
}

/// Creates an object validator from `(field name, validator)` pairs.
///
/// Declaration order decides the order in which field errors are reported.
/// A name declared twice keeps its first position and its last validator.
///
/// # Examples
///
///     use shapecheck::schema::{Validate, Validator, Value, number, object, string};
///
///     let user = object([
///         ("name", Validator::from(string().min_length(2))),
///         ("age", number().min(0).optional().into()),
///     ]);
///     let value: Value = [("name", "Jo")].into_iter().collect();
///     assert!(user.validate(&value).is_valid());
#[must_use]
pub fn object<I, K, V>(fields: I) -> ObjectValidator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Validator>,
{
    ObjectValidator::new(
        fields
            .into_iter()
            .map(|(name, validator)| (name.into(), validator.into()))
            .collect(),
    )
}
