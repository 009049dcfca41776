// src/modules/user/application/domain/validation.rs
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Rule table
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub max_length: usize,
}

pub const USERNAME_RULE: FieldRule = FieldRule {
    name: "username",
    max_length: 80,
};

pub const EMAIL_RULE: FieldRule = FieldRule {
    name: "email",
    max_length: 120,
};

//
// ──────────────────────────────────────────────────────────
// Submitted values
// ──────────────────────────────────────────────────────────
//

/// A field as it arrived in the request body, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Missing,
    Text(String),
    NotText,
}

impl From<Option<Value>> for FieldValue {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::String(text)) => FieldValue::Text(text),
            Some(_) => FieldValue::NotText,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a string")]
    NotAString { field: &'static str },

    #[error("String length exceeds maximum allowed length of {max} for {field}")]
    TooLong { field: &'static str, max: usize },
}

/// Checks presence, type and length, in that order.
pub fn validate_field(value: FieldValue, rule: FieldRule) -> Result<String, ValidationError> {
    let text = match value {
        FieldValue::Missing => return Err(ValidationError::Required { field: rule.name }),
        FieldValue::Text(text) if text.is_empty() => {
            return Err(ValidationError::Required { field: rule.name })
        }
        FieldValue::NotText => return Err(ValidationError::NotAString { field: rule.name }),
        FieldValue::Text(text) => text,
    };

    if text.chars().count() > rule.max_length {
        return Err(ValidationError::TooLong {
            field: rule.name,
            max: rule.max_length,
        });
    }

    Ok(text)
}

//
// ──────────────────────────────────────────────────────────
// User input
// ──────────────────────────────────────────────────────────
//

/// Raw username/email pair handed to the create and update use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub username: FieldValue,
    pub email: FieldValue,
}

impl UserInput {
    pub fn new(username: impl Into<FieldValue>, email: impl Into<FieldValue>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Validates username first, then email.
    pub fn validate(self) -> Result<UserFields, ValidationError> {
        let username = validate_field(self.username, USERNAME_RULE)?;
        let email = validate_field(self.email, EMAIL_RULE)?;

        Ok(UserFields { username, email })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub username: String,
    pub email: String,
}
