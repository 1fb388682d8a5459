// File: contact-form/core/src/rules.rs
// Purpose: Field predicates and the per-field rule chain

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::field::FieldId;

// Intentionally loose: something@something.something, no TLD or domain checks.
// U+FEFF counts as whitespace, as it does for browsers.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Minimum trimmed message length, in UTF-16 code units
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;

/// A field validation failure. `Display` is the text shown in the error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,

    #[error("Please enter a valid email address (e.g. name@example.com).")]
    InvalidEmail,

    #[error("Message must be at least {min} characters.")]
    MessageTooShort { min: usize },
}

/// Outcome of checking one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The message to display, if the field failed
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(err) => Some(err.to_string()),
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(err) => Some(err),
        }
    }
}

/// Tunables for the rule chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    pub min_message_chars: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_message_chars: DEFAULT_MIN_MESSAGE_CHARS,
        }
    }
}

/// True for a missing value or one that is only whitespace
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, |v| trim(v).is_empty())
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Strip leading and trailing whitespace the way browsers do, BOM included
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_whitespace)
}

/// Syntactic email check: `^[^\s@]+@[^\s@]+\.[^\s@]+$`, with U+FEFF as whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Run the rule chain for `field` against its raw input value.
///
/// The value is trimmed first. Rules apply in order (required, email shape,
/// message length) and the first failure wins, so a result carries at most
/// one message.
pub fn check_field(field: FieldId, raw: &str, rules: &RuleConfig) -> ValidationResult {
    let value = trim(raw);

    if is_empty(Some(value)) {
        return ValidationResult::Invalid(FieldError::Required);
    }

    if field == FieldId::Email && !is_valid_email(value) {
        return ValidationResult::Invalid(FieldError::InvalidEmail);
    }

    if field == FieldId::Message && value.encode_utf16().count() < rules.min_message_chars {
        return ValidationResult::Invalid(FieldError::MessageTooShort {
            min: rules.min_message_chars,
        });
    }

    ValidationResult::Valid
}
