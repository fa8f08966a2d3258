//! Declarative payload validation.
//!
//! A [`Schema`] is a table of field rules; the evaluator runs every rule in
//! one pass and reports each violation separately.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, normalize, validate};
pub use rules::{Constraint, FieldRule, FieldType, FieldViolation, Schema, ValidationResult};
