//! Individual validation rules

use crate::state::{FieldId, FieldInput};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Address check: dot-separated atoms of RFC 5322 atext (Unicode letters
/// allowed), `@`, then two or more non-empty domain labels
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\w!#$%&'*+/=?^`{|}~-]+(?:\.[\w!#$%&'*+/=?^`{|}~-]+)*",
        "@",
        r"(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+",
        r"[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?$",
    ))
    .expect("valid email pattern")
});

/// A field failed one of its rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field:?}: {message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub message: String,
}

/// One declarative constraint on a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty
    Required { message: String },
    /// Non-empty text must look like an email address
    Email { message: String },
    /// Boolean must be `true`
    MustBeTrue { message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn must_be_true(message: impl Into<String>) -> Self {
        Self::MustBeTrue {
            message: message.into(),
        }
    }

    /// Check `input`, returning the rule's message on failure
    pub fn check(&self, input: FieldInput<'_>) -> Result<(), &str> {
        match (self, input) {
            (Self::Required { message }, FieldInput::Text(s)) if s.is_empty() => {
                Err(message.as_str())
            }
            (Self::Required { message }, FieldInput::Bool(false)) => Err(message.as_str()),
            // Empty strings are left to `Required`
            (Self::Email { message }, FieldInput::Text(s))
                if !s.is_empty() && !EMAIL_RE.is_match(s) =>
            {
                Err(message.as_str())
            }
            (Self::MustBeTrue { message }, FieldInput::Bool(b)) if !b => Err(message.as_str()),
            (Self::MustBeTrue { message }, FieldInput::Text(_)) => Err(message.as_str()),
            _ => Ok(()),
        }
    }
}
