//! `shapecheck` — composable validators that check nested data against
//! declarative type and shape constraints.
//!
//! Validators are built once through the factory functions in [`schema`],
//! configured with chained builder calls, and then reused for any number of
//! [`validate`](schema::Validate::validate) or
//! [`parse`](schema::Validate::parse) calls. Every failure is reported with
//! its location inside the checked value.

/// Validator construction, value model, and validation results.
pub mod schema;
