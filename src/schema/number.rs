//! Number validation: integral and fractional values with inclusive bounds.

use std::cmp::Ordering;
use std::fmt;

use super::presence::{Presence, presence_builders};
use super::result::ValidationResult;
use super::validator::Validate;
use super::value::{Value, ValueKind};

/// `2^63` as a float: the first value above every `i64`.
const I64_UPPER: f64 = f64::from_bits(0x43E0_0000_0000_0000);
/// `-2^63` as a float, equal to `i64::MIN`.
const I64_LOWER: f64 = f64::from_bits(0xC3E0_0000_0000_0000);

/// A numeric bound or value, integral or fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integral number.
    Integer(i64),
    /// A fractional number.
    Float(f64),
}

impl Number {
    /// Reads a number out of a value, if it holds one.
    #[must_use]
    pub const fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Self::Integer(*n)),
            Value::Float(n) => Some(Self::Float(*n)),
            _ => None,
        }
    }

    /// Compares two numbers exactly, without converting integers to floats.
    ///
    /// Returns `None` when either side is `NaN`.
    #[must_use]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Integer(a), Self::Float(b)) => compare_int_float(a, b),
            (Self::Float(a), Self::Integer(b)) => compare_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

/// Orders integer `int` against float `float` exactly.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_UPPER {
        return Some(Ordering::Less);
    }
    if float < I64_LOWER {
        return Some(Ordering::Greater);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float is integral and within i64 range after the checks above"
    )]
    let whole = float.trunc() as i64;
    match int.cmp(&whole) {
        Ordering::Equal => 0.0_f64.partial_cmp(&float.fract()),
        unequal => Some(unequal),
    }
}

/// Validates numeric values.
///
/// Booleans and numeric-looking strings are rejected. Bounds are inclusive
/// and reported in the order minimum, maximum.
///
/// # Examples
///
///     use shapecheck::schema::{Validate, Value, number};
///
///     let age = number().min(0).max(150);
///     assert!(age.validate(&Value::from(25)).is_valid());
///     assert!(!age.validate(&Value::from(-5)).is_valid());
///     assert!(!age.validate(&Value::from("25")).is_valid());
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    presence: Presence,
    min: Option<Number>,
    max: Option<Number>,
}

presence_builders!(NumberValidator);

impl NumberValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requires the value to be at least `bound`.
    #[must_use]
    pub fn min(mut self, bound: impl Into<Number>) -> Self {
        self.min = Some(bound.into());
        self
    }

    /// Requires the value to be at most `bound`.
    #[must_use]
    pub fn max(mut self, bound: impl Into<Number>) -> Self {
        self.max = Some(bound.into());
        self
    }

    /// Returns the configured minimum.
    #[must_use]
    pub const fn min_bound(&self) -> Option<Number> {
        self.min
    }

    /// Returns the configured maximum.
    #[must_use]
    pub const fn max_bound(&self) -> Option<Number> {
        self.max
    }

    fn check(&self, value: &Value) -> ValidationResult {
        let Some(number) = Number::from_value(value) else {
            return self
                .presence
                .type_mismatch(ValueKind::Number, value.kind());
        };

        let mut errors = Vec::new();
        if let Some(min) = self
            .min
            .filter(|min| number.compare(*min) == Some(Ordering::Less))
        {
            errors.push(format!("Number must be at least {min}"));
        }
        if let Some(max) = self
            .max
            .filter(|max| number.compare(*max) == Some(Ordering::Greater))
        {
            errors.push(format!("Number must be at most {max}"));
        }
        ValidationResult::from_errors(errors)
    }
}

impl Validate for NumberValidator {
    fn validate(&self, value: &Value) -> ValidationResult {
        self.presence.check(value, |present| self.check(present))
    }
}
