//! The pass/fail record returned by every validation.

/// Outcome of validating one value.
///
/// A result is valid exactly when it carries no errors. Errors are plain
/// human-readable strings in a stable order: a type error on its own,
/// otherwise constraint errors in declaration order followed by nested errors
/// in field-declaration or element-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a result from its two fields.
    #[must_use]
    pub const fn new(is_valid: bool, errors: Vec<String>) -> Self {
        Self { is_valid, errors }
    }

    /// A passing result with no errors.
    #[must_use]
    pub const fn valid() -> Self {
        Self::new(true, Vec::new())
    }

    /// A result whose validity is derived from `errors` being empty.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self::new(errors.is_empty(), errors)
    }

    /// A failing result carrying a single message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, vec![message.into()])
    }

    /// Returns `true` when the value passed validation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the ordered failure messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the result and returns its failure messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl From<ValidationResult> for bool {
    fn from(result: ValidationResult) -> Self {
        result.is_valid
    }
}

impl From<&ValidationResult> for bool {
    fn from(result: &ValidationResult) -> Self {
        result.is_valid
    }
}
