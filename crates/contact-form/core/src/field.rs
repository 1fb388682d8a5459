// File: contact-form/core/src/field.rs
// Purpose: The four contact form fields and their markup keys

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownField;

/// One of the contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    /// Every field, in document order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    /// `data-testid` of the field's input control
    pub fn input_key(&self) -> &'static str {
        match self {
            FieldId::Name => "test-contact-name",
            FieldId::Email => "test-contact-email",
            FieldId::Subject => "test-contact-subject",
            FieldId::Message => "test-contact-message",
        }
    }

    /// Element id of the field's error slot
    pub fn error_slot_id(&self) -> &'static str {
        match self {
            FieldId::Name => "test-contact-error-name",
            FieldId::Email => "test-contact-error-email",
            FieldId::Subject => "test-contact-error-subject",
            FieldId::Message => "test-contact-error-message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("name", FieldId::Name)]
    #[case("Email", FieldId::Email)]
    #[case(" subject ", FieldId::Subject)]
    #[case("MESSAGE", FieldId::Message)]
    fn test_parse_field(#[case] input: &str, #[case] expected: FieldId) {
        assert_eq!(input.parse::<FieldId>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "phone".parse::<FieldId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field 'phone'");
    }

    #[test]
    fn test_markup_keys() {
        assert_eq!(FieldId::Email.input_key(), "test-contact-email");
        assert_eq!(FieldId::Message.error_slot_id(), "test-contact-error-message");
    }

    #[test]
    fn test_document_order() {
        let names: Vec<_> = FieldId::ALL.iter().map(FieldId::as_str).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
    }
}
