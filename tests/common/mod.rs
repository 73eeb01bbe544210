//! Shared test helpers for integration tests.

use shapecheck::schema::{ObjectValidator, Validator, Value, array, boolean, number, object, string};

/// Pattern accepting `local@domain.tld` style addresses.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Loads a YAML fixture from the `tests/fixtures/` directory as a [`Value`].
///
/// # Panics
///
/// Panics if the file cannot be read or is not valid YAML.
pub fn load_fixture(name: &str) -> Value {
    let yaml = std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"));
    serde_saphyr::from_str(&yaml).unwrap_or_else(|e| panic!("failed to decode fixture {name}: {e}"))
}

/// Builds the user-profile schema exercised by the fixture corpus.
///
/// # Panics
///
/// Panics if one of the built-in patterns fails to compile.
pub fn user_schema() -> ObjectValidator {
    let postal_code = string()
        .pattern(r"^\d{5}$")
        .unwrap_or_else(|e| panic!("postal code pattern should compile: {e}"))
        .with_message("Postal code must be 5 digits");
    let address = object([
        ("street", Validator::from(string().min_length(1))),
        ("city", string().min_length(1).into()),
        ("postal_code", postal_code.into()),
        ("country", string().min_length(2).into()),
    ]);

    object([
        ("id", Validator::from(string().with_message("ID must be a string"))),
        ("name", string().min_length(2).max_length(50).into()),
        ("email", email().into()),
        ("age", number().min(0).max(150).optional().into()),
        ("is_active", boolean().into()),
        ("tags", array(string()).min_length(1).into()),
        ("address", address.optional().into()),
    ])
}

/// Builds a string validator for e-mail addresses.
///
/// # Panics
///
/// Panics if [`EMAIL_PATTERN`] fails to compile.
pub fn email() -> shapecheck::schema::StringValidator {
    string()
        .pattern(EMAIL_PATTERN)
        .unwrap_or_else(|e| panic!("email pattern should compile: {e}"))
}
