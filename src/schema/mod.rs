//! Validator construction, value model, and validation results.
//!
//! A schema is a tree of validators built with the factory functions
//! [`string`], [`number`], [`boolean`], [`array`], and [`object`] and
//! configured with chained builder calls. Builders consume and return the
//! validator, so configuration ends once a validator is shared by reference;
//! from then on [`Validate::validate`] only reads it.
//!
//! Error messages are path-qualified: nested failures are prefixed with
//! `Field '<name>': ` or `Item at index <i>: ` for every level they pass
//! through.

mod array;
mod boolean;
mod error;
mod factory;
mod number;
mod object;
mod presence;
mod result;
mod string;
mod validator;
mod value;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use error::{SchemaError, ValidationError};
pub use factory::{array, boolean, number, object, string};
pub use number::{Number, NumberValidator};
pub use object::ObjectValidator;
pub use result::ValidationResult;
pub use string::StringValidator;
pub use validator::{Validate, Validator};
pub use value::{Value, ValueKind};
