// File: contact-form/core/src/dom.rs
// Purpose: Document/element ports and the markup contract of the host page

use std::fmt;

use crate::error::MountError;
use crate::field::FieldId;

/// Element id of the form container
pub const FORM_ID: &str = "contact-form";
/// `data-testid` of the submit control
pub const SUBMIT_KEY: &str = "test-contact-submit";
/// `data-testid` of the success indicator
pub const SUCCESS_KEY: &str = "test-contact-success";

pub const ARIA_INVALID: &str = "aria-invalid";
pub const ARIA_DESCRIBEDBY: &str = "aria-describedby";

/// How an element is looked up on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    /// `[data-testid="..."]`
    TestId(&'static str),
    /// `#id`
    Id(&'static str),
}

impl Locator {
    /// CSS selector equivalent of this locator
    pub fn selector(&self) -> String {
        match self {
            Locator::TestId(key) => format!("[data-testid=\"{}\"]", key),
            Locator::Id(id) => format!("#{}", id),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// Handle to a live page element.
///
/// Handles are cheap to clone and all point at the same node, so every
/// mutator takes `&self`.
pub trait Element: Clone + 'static {
    /// Current value of an input control (empty for non-inputs)
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);
    fn is_visible(&self) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn set_disabled(&self, disabled: bool);
    fn focus(&self);
}

/// The host page
pub trait Document {
    type Element: Element;

    fn find(&self, locator: &Locator) -> Option<Self::Element>;

    /// Like [`Document::find`], but a missing element is an error
    fn require(&self, locator: &Locator) -> Result<Self::Element, MountError> {
        self.find(locator).ok_or_else(|| MountError::MissingElement {
            locator: locator.to_string(),
        })
    }
}

/// An input control paired with its error slot
#[derive(Debug, Clone)]
pub struct FieldElements<E> {
    pub input: E,
    pub error: E,
}

/// Every element the contact form needs, acquired once
#[derive(Debug, Clone)]
pub struct ContactElements<E> {
    pub form: E,
    pub submit: E,
    pub success: E,
    fields: [FieldElements<E>; 4],
}

impl<E: Element> ContactElements<E> {
    /// Look up the whole markup contract. Fails on the first missing element.
    pub fn locate<D>(doc: &D) -> Result<Self, MountError>
    where
        D: Document<Element = E>,
    {
        let field = |id: FieldId| -> Result<FieldElements<E>, MountError> {
            Ok(FieldElements {
                input: doc.require(&Locator::TestId(id.input_key()))?,
                error: doc.require(&Locator::Id(id.error_slot_id()))?,
            })
        };

        Ok(Self {
            form: doc.require(&Locator::Id(FORM_ID))?,
            fields: [
                field(FieldId::Name)?,
                field(FieldId::Email)?,
                field(FieldId::Subject)?,
                field(FieldId::Message)?,
            ],
            submit: doc.require(&Locator::TestId(SUBMIT_KEY))?,
            success: doc.require(&Locator::TestId(SUCCESS_KEY))?,
        })
    }

    pub fn field(&self, id: FieldId) -> &FieldElements<E> {
        // FieldId::ALL order matches the array layout
        match id {
            FieldId::Name => &self.fields[0],
            FieldId::Email => &self.fields[1],
            FieldId::Subject => &self.fields[2],
            FieldId::Message => &self.fields[3],
        }
    }

    pub fn input(&self, id: FieldId) -> &E {
        &self.field(id).input
    }

    pub fn error_slot(&self, id: FieldId) -> &E {
        &self.field(id).error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDocument;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selector() {
        assert_eq!(
            Locator::TestId("test-contact-name").selector(),
            "[data-testid=\"test-contact-name\"]"
        );
        assert_eq!(Locator::Id("contact-form").selector(), "#contact-form");
    }

    #[test]
    fn test_locate_contact_page() {
        let doc = FakeDocument::contact_page();
        let elements = ContactElements::locate(&doc).unwrap();
        elements.input(FieldId::Subject).set_value("Hello");
        assert_eq!(doc.value(&Locator::TestId("test-contact-subject")), "Hello");
    }

    #[test]
    fn test_locate_reports_missing_element() {
        let doc = FakeDocument::contact_page();
        doc.remove(&Locator::Id("test-contact-error-email"));

        let err = ContactElements::locate(&doc).unwrap_err();
        assert_eq!(
            err,
            MountError::MissingElement {
                locator: "#test-contact-error-email".to_string()
            }
        );
    }
}
