//! Contact submission domain.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::validation::{self, Constraint, FieldRule, FieldType, Schema};

/// `local-part@domain.tld`, no whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Triage state of a contact submission.
///
/// Only `New` is ever written; the later states are modelled for an admin
/// workflow that does not exist yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            _ => None,
        }
    }

    pub const ALL: &'static [&'static str] = &["new", "read", "replied"];
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalized contact form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

pub fn contact_schema() -> Schema {
    use Constraint::*;

    Schema::new(vec![
        FieldRule::new("name", Required, "Name is required"),
        FieldRule::new("name", Type(FieldType::String), "Name must be text"),
        FieldRule::new("name", MinLength(2), "Name must be at least 2 characters"),
        FieldRule::new("name", MaxLength(50), "Name cannot exceed 50 characters"),
        FieldRule::new("email", Required, "Email is required"),
        FieldRule::new("email", Type(FieldType::String), "Email must be text"),
        FieldRule::new(
            "email",
            Pattern(&EMAIL_RE),
            "Please provide a valid email address",
        ),
        FieldRule::new("subject", Type(FieldType::String), "Subject must be text"),
        FieldRule::new("subject", MaxLength(100), "Subject cannot exceed 100 characters"),
        FieldRule::new("message", Required, "Message is required"),
        FieldRule::new("message", Type(FieldType::String), "Message must be text"),
        FieldRule::new(
            "message",
            MinLength(10),
            "Message must be at least 10 characters",
        ),
        FieldRule::new(
            "message",
            MaxLength(1000),
            "Message cannot exceed 1000 characters",
        ),
    ])
    .with_lowercase(&["email"])
}

/// Validate a raw contact payload. Email comes back trimmed and lowercased.
pub fn validate_contact(payload: &Value) -> Result<ContactInput, CoreError> {
    let normalized = validation::validate(&contact_schema(), payload)?;
    let mut input: ContactInput = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| CoreError::Validation(vec![e.to_string()]))?;
    input.subject = input.subject.filter(|s| !s.is_empty());
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn payload(message: &str) -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": message,
        })
    }

    #[test]
    fn message_of_nine_characters_is_rejected() {
        assert_matches!(
            validate_contact(&payload("123456789")),
            Err(CoreError::Validation(msgs)) if msgs == vec!["Message must be at least 10 characters"]
        );
    }

    #[test]
    fn message_of_ten_characters_is_accepted() {
        let input = validate_contact(&payload("1234567890")).unwrap();
        assert_eq!(input.message, "1234567890");
        assert_eq!(input.subject, None);
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let mut p = payload("Hello there, nice portfolio");
        p["email"] = json!("  Jane.Doe@Example.COM ");
        let input = validate_contact(&p).unwrap();
        assert_eq!(input.email, "jane.doe@example.com");
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        let mut p = payload("Hello there, nice portfolio");
        p["email"] = json!("jane@localhost");
        assert_matches!(
            validate_contact(&p),
            Err(CoreError::Validation(msgs)) if msgs == vec!["Please provide a valid email address"]
        );
    }

    #[test]
    fn subject_is_optional_but_bounded() {
        let mut p = payload("Hello there, nice portfolio");
        p["subject"] = json!("Hi");
        assert_eq!(validate_contact(&p).unwrap().subject.as_deref(), Some("Hi"));

        p["subject"] = json!("s".repeat(101));
        assert_matches!(validate_contact(&p), Err(CoreError::Validation(msgs)) if msgs.len() == 1);
    }

    #[test]
    fn null_subject_reads_as_absent() {
        let mut p = payload("Hello there, nice portfolio");
        p["subject"] = Value::Null;
        assert_eq!(validate_contact(&p).unwrap().subject, None);
    }

    #[test]
    fn missing_fields_each_report_once() {
        assert_matches!(
            validate_contact(&json!({})),
            Err(CoreError::Validation(msgs)) if msgs.len() == 3
        );
    }

    #[test]
    fn client_cannot_set_status() {
        let mut p = payload("Hello there, nice portfolio");
        p["status"] = json!("replied");
        assert_matches!(
            validate_contact(&p),
            Err(CoreError::Validation(msgs)) if msgs == vec!["status is not allowed"]
        );
    }
}
