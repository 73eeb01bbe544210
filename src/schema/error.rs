//! Error types for validator construction and raising validation.

/// Errors raised while configuring a validator.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A string pattern could not be compiled as a regular expression.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern source text that failed to compile.
        pattern: String,
        /// The compiler's explanation of the failure.
        reason: String,
    },
}

/// Raised by [`Validate::parse`](super::Validate::parse) when a value fails
/// validation.
///
/// Carries the complete ordered error list that
/// [`Validate::validate`](super::Validate::validate) reports for the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", .errors.join(", "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Creates an error from an ordered list of failure messages.
    #[must_use]
    pub const fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Returns the ordered failure messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the error and returns its failure messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
