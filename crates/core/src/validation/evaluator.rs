//! Schema evaluator: pure logic, no store access.

use serde_json::{Map, Value};

use super::rules::{Constraint, FieldRule, FieldViolation, Schema, ValidationResult};
use crate::error::CoreError;

/// Trim string values (including strings inside arrays) and lowercase the
/// fields the schema marks for it.
///
/// A `null` on a known field is dropped, so it reads as absent and picks up
/// the field's default.
pub fn normalize(schema: &Schema, data: &Map<String, Value>) -> Map<String, Value> {
    data.iter()
        .filter(|(key, value)| !(value.is_null() && schema.knows(key)))
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => {
                    let trimmed = s.trim();
                    if schema.lowercase.contains(&key.as_str()) {
                        Value::String(trimmed.to_lowercase())
                    } else {
                        Value::String(trimmed.to_string())
                    }
                }
                Value::Array(items) => Value::Array(
                    items
                        .iter()
                        .map(|item| match item {
                            Value::String(s) => Value::String(s.trim().to_string()),
                            other => other.clone(),
                        })
                        .collect(),
                ),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Evaluate every rule of `schema` against a single record.
///
/// All rules run; the result lists one violation per failing rule plus one
/// per field the schema does not know.
pub fn evaluate_rules(schema: &Schema, data: &Map<String, Value>) -> ValidationResult {
    let mut errors: Vec<FieldViolation> = schema
        .rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data))
        .collect();

    for (key, value) in data {
        if !schema.knows(key) {
            errors.push(FieldViolation {
                field: key.clone(),
                rule_type: "unknown_field".to_string(),
                message: format!("{key} is not allowed"),
                value: Some(value.clone()),
            });
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Normalize and validate a raw JSON payload.
///
/// Returns the normalized object, or [`CoreError::Validation`] carrying one
/// message per violation.
pub fn validate(schema: &Schema, payload: &Value) -> Result<Map<String, Value>, CoreError> {
    let object = payload.as_object().ok_or_else(|| {
        CoreError::Validation(vec!["Request body must be a JSON object".to_string()])
    })?;

    let normalized = normalize(schema, object);
    let result = evaluate_rules(schema, &normalized);
    if result.is_valid {
        Ok(normalized)
    } else {
        Err(CoreError::Validation(result.messages()))
    }
}

fn evaluate_single_rule(rule: &FieldRule, data: &Map<String, Value>) -> Option<FieldViolation> {
    let value = data.get(rule.field);
    let failed = match &rule.constraint {
        Constraint::Required => match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            _ => false,
        },
        Constraint::Type(expected) => present(value).is_some_and(|v| !expected.matches(v)),
        Constraint::MinLength(min) => str_value(value).is_some_and(|s| s.chars().count() < *min),
        Constraint::MaxLength(max) => str_value(value).is_some_and(|s| s.chars().count() > *max),
        Constraint::MinValue(min) => value.and_then(Value::as_f64).is_some_and(|n| n < *min),
        Constraint::MaxValue(max) => value.and_then(Value::as_f64).is_some_and(|n| n > *max),
        Constraint::OneOf(allowed) => str_value(value).is_some_and(|s| !allowed.contains(&s)),
        Constraint::Pattern(re) => str_value(value).is_some_and(|s| !re.is_match(s)),
        Constraint::MinItems(min) => value
            .and_then(Value::as_array)
            .is_some_and(|items| items.len() < *min),
        Constraint::NonEmptyItems => value.and_then(Value::as_array).is_some_and(|items| {
            items
                .iter()
                .any(|item| item.as_str().map_or(true, str::is_empty))
        }),
    };

    failed.then(|| FieldViolation {
        field: rule.field.to_string(),
        rule_type: rule.constraint.name().to_string(),
        message: rule.message.clone(),
        value: value.cloned(),
    })
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn str_value(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}
