//! String validation: type check plus length and pattern constraints.

use regex::Regex;
use tracing::debug;

use super::error::SchemaError;
use super::presence::{Presence, presence_builders};
use super::result::ValidationResult;
use super::validator::Validate;
use super::value::{Value, ValueKind};

/// Validates string values.
///
/// Length bounds count Unicode scalar values. Every failing constraint is
/// reported, in the order minimum length, maximum length, pattern.
///
/// # Examples
///
///     use shapecheck::schema::{Validate, Value, string};
///
///     let name = string().min_length(2).max_length(50);
///     assert!(name.validate(&Value::from("John")).is_valid());
///     assert!(!name.validate(&Value::from("J")).is_valid());
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    presence: Presence,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

presence_builders!(StringValidator);

impl StringValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requires at least `length` characters.
    #[must_use]
    pub const fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Allows at most `length` characters.
    #[must_use]
    pub const fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires the string to match `source`, compiled once here.
    ///
    /// The match must start at the beginning of the string; it only has to
    /// reach the end when the pattern itself anchors it with `$`, which
    /// matches only at the very end of the text, never before a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if `source` is not a valid
    /// regular expression.
    pub fn pattern(self, source: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(source).map_err(|error| {
            debug!(pattern = source, %error, "rejected string pattern");
            SchemaError::InvalidPattern {
                pattern: source.to_owned(),
                reason: error.to_string(),
            }
        })?;
        Ok(self.pattern_regex(regex))
    }

    /// Requires the string to match an already compiled `regex`, with the
    /// same start anchoring as [`StringValidator::pattern`].
    #[must_use]
    pub fn pattern_regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }

    /// Returns the configured minimum length.
    #[must_use]
    pub const fn min_length_bound(&self) -> Option<usize> {
        self.min_length
    }

    /// Returns the configured maximum length.
    #[must_use]
    pub const fn max_length_bound(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns the source text of the configured pattern.
    #[must_use]
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    fn check(&self, value: &Value) -> ValidationResult {
        let Value::String(text) = value else {
            return self
                .presence
                .type_mismatch(ValueKind::String, value.kind());
        };

        let mut errors = Vec::new();
        let length = text.chars().count();
        if let Some(min) = self.min_length.filter(|min| length < *min) {
            errors.push(format!("String must be at least {min} characters long"));
        }
        if let Some(max) = self.max_length.filter(|max| length > *max) {
            errors.push(format!("String must be at most {max} characters long"));
        }
        if self
            .pattern
            .as_ref()
            .is_some_and(|regex| !matches_at_start(regex, text))
        {
            errors.push("String does not match required pattern".to_owned());
        }
        ValidationResult::from_errors(errors)
    }
}

impl Validate for StringValidator {
    fn validate(&self, value: &Value) -> ValidationResult {
        self.presence.check(value, |present| self.check(present))
    }
}

/// Returns `true` when `regex` matches a prefix of `text`.
///
/// Leftmost-first search reports a match at offset 0 whenever one exists, so
/// checking the first match's start is equivalent to an anchored match.
fn matches_at_start(regex: &Regex, text: &str) -> bool {
    regex.find(text).is_some_and(|found| found.start() == 0)
}
