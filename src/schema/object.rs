//! Keyed mapping validation against an ordered field schema.

use indexmap::IndexMap;
use tracing::trace;

use super::presence::{Presence, presence_builders};
use super::result::ValidationResult;
use super::validator::{Validate, Validator};
use super::value::{ABSENT, Value, ValueKind};

/// Validates mappings field by field.
///
/// Fields are checked in declaration order and every failing field is
/// reported, each child error prefixed with `Field '<name>': `. A key
/// missing from the value is validated as absent, so only optional fields
/// may be left out. Keys that the schema does not declare are ignored.
///
/// # Examples
///
///     use shapecheck::schema::{Validate, Value, number, object, string};
///
///     let person = object([("name", string())]).field("age", number());
///     let value: Value = [("name", "John")].into_iter().collect();
///     assert_eq!(
///         person.validate(&value).errors(),
///         ["Field 'age': Value is required"]
///     );
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    presence: Presence,
    schema: IndexMap<String, Validator>,
}

presence_builders!(ObjectValidator);

impl ObjectValidator {
    pub(crate) fn new(schema: IndexMap<String, Validator>) -> Self {
        Self {
            presence: Presence::default(),
            schema,
        }
    }

    /// Appends a field to the schema.
    ///
    /// Redeclaring an existing name replaces its validator but keeps the
    /// field's original position.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.schema.insert(name.into(), validator.into());
        self
    }

    /// Returns the field schema in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &IndexMap<String, Validator> {
        &self.schema
    }

    fn check(&self, value: &Value) -> ValidationResult {
        let Value::Map(entries) = value else {
            return self.presence.type_mismatch(ValueKind::Map, value.kind());
        };

        let mut errors = Vec::new();
        for (name, validator) in &self.schema {
            let field_value = entries.get(name).unwrap_or(&ABSENT);
            let result = validator.validate(field_value);
            if result.is_valid() {
                continue;
            }
            trace!(field = %name, error_count = result.errors().len(), "object field failed validation");
            errors.extend(
                result
                    .into_errors()
                    .into_iter()
                    .map(|error| format!("Field '{name}': {error}")),
            );
        }
        ValidationResult::from_errors(errors)
    }
}

impl Validate for ObjectValidator {
    fn validate(&self, value: &Value) -> ValidationResult {
        self.presence.check(value, |present| self.check(present))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::schema::{array, boolean, number, object, string};

    #[fixture]
    fn person() -> ObjectValidator {
        object([("name", Validator::from(string())), ("age", number().into())])
    }

    fn map<const N: usize>(pairs: [(&str, Value); N]) -> Value {
        pairs.into_iter().collect()
    }

    #[rstest]
    fn matching_object_passes(person: ObjectValidator) {
        let result = person.validate(&map([("name", "John".into()), ("age", 30.into())]));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[rstest]
    #[case::text(Value::from("not a map"), "Expected map, got string")]
    #[case::list(Value::Array(Vec::new()), "Expected map, got array")]
    fn non_maps_fail_the_type_check(person: ObjectValidator, #[case] value: Value, #[case] expected: &str) {
        assert_eq!(person.validate(&value).errors(), [expected]);
    }

    #[rstest]
    fn missing_required_field_is_reported(person: ObjectValidator) {
        let result = person.validate(&map([("name", "John".into())]));
        assert_eq!(result.errors(), ["Field 'age': Value is required"]);
    }

    #[test]
    fn missing_optional_field_passes() {
        let validator = object([("age", number().optional())]);
        let result = validator.validate(&map([]));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn explicit_null_counts_as_absent() {
        let validator = object([("age", number().optional())]).field("name", string());
        let result = validator.validate(&map([("age", Value::Null), ("name", Value::Null)]));
        assert_eq!(result.errors(), ["Field 'name': Value is required"]);
    }

    #[rstest]
    fn errors_follow_schema_order_not_value_order(person: ObjectValidator) {
        let result = person.validate(&map([("age", "thirty".into()), ("name", 5.into())]));
        assert_eq!(
            result.errors(),
            [
                "Field 'name': Expected string, got number",
                "Field 'age': Expected number, got string",
            ]
        );
    }

    #[rstest]
    fn undeclared_keys_are_ignored(person: ObjectValidator) {
        let value = map([
            ("name", "John".into()),
            ("age", 30.into()),
            ("extra", true.into()),
        ]);
        assert!(person.validate(&value).is_valid());
    }

    #[test]
    fn nested_failures_are_path_prefixed() {
        let validator = object([(
            "address",
            object([("postal_code", Validator::from(string().min_length(5)))])
                .field("tags", array(boolean())),
        )]);
        let address = map([
            ("postal_code", "123".into()),
            ("tags", Value::Array(vec![Value::Bool(true), Value::from("no")])),
        ]);
        let result = validator.validate(&map([("address", address)]));
        assert_eq!(
            result.errors(),
            [
                "Field 'address': Field 'postal_code': String must be at least 5 characters long",
                "Field 'address': Field 'tags': Item at index 1: Expected boolean, got string",
            ]
        );
    }

    #[test]
    fn custom_message_does_not_replace_field_errors() {
        let validator = object([("id", string().with_message("ID must be a string"))])
            .with_message("record expected");
        assert_eq!(validator.validate(&Value::Integer(1)).errors(), ["record expected"]);
        assert_eq!(validator.validate(&Value::Null).errors(), ["record expected"]);
        assert_eq!(
            validator.validate(&map([("id", 12_345.into())])).errors(),
            ["Field 'id': ID must be a string"]
        );
    }

    #[test]
    fn redeclared_field_keeps_its_position() {
        let validator = object([("a", string()), ("b", string())]).field("a", number());
        let names: Vec<&str> = validator.fields().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(matches!(validator.fields().get("a"), Some(Validator::Number(_))));
    }
}
