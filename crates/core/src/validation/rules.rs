//! Validation rule and result types.

use regex::Regex;
use serde::Serialize;

/// JSON shape a field value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Array,
}

impl FieldType {
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
        }
    }
}

/// A single constraint on one field.
///
/// Every constraint except [`Constraint::Required`] skips absent or null
/// values, so a missing field produces exactly one violation.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Present, non-null, and not an empty string.
    Required,
    Type(FieldType),
    /// Minimum string length in characters.
    MinLength(usize),
    /// Maximum string length in characters.
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    /// String value must be one of the listed values.
    OneOf(&'static [&'static str]),
    /// String value must match the regular expression.
    Pattern(&'static Regex),
    /// Array must hold at least this many entries.
    MinItems(usize),
    /// Every array entry must be a non-empty string.
    NonEmptyItems,
}

impl Constraint {
    /// Stable name used in [`FieldViolation::rule_type`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type(_) => "type_check",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::MinValue(_) => "min_value",
            Self::MaxValue(_) => "max_value",
            Self::OneOf(_) => "enum_values",
            Self::Pattern(_) => "regex_pattern",
            Self::MinItems(_) => "min_items",
            Self::NonEmptyItems => "non_empty_items",
        }
    }
}

/// One row of a schema table: a field, a constraint, and the message
/// reported when the constraint fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldRule {
    pub fn new(field: &'static str, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field,
            constraint,
            message: message.into(),
        }
    }
}

/// A declarative payload schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub rules: Vec<FieldRule>,
    /// Fields whose string value is lowercased during normalization.
    pub lowercase: &'static [&'static str],
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self {
            rules,
            lowercase: &[],
        }
    }

    pub fn with_lowercase(mut self, fields: &'static [&'static str]) -> Self {
        self.lowercase = fields;
        self
    }

    /// Whether any rule mentions `field`.
    pub fn knows(&self, field: &str) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }
}

/// Aggregated result of evaluating a schema against one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
