// File: contact-form/core/src/form.rs
// Purpose: The contact form component - live validation, error slots and submit gating

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::dom::{ContactElements, Document, Element, ARIA_DESCRIBEDBY, ARIA_INVALID};
use crate::error::MountError;
use crate::field::FieldId;
use crate::rules::{check_field, FieldError};
use crate::schedule::Scheduler;

/// Key that dismisses the success indicator
pub const DISMISS_KEY: &str = "Escape";

/// A user interaction the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The field's content changed
    Input(FieldId),
    /// The field lost focus
    Blur(FieldId),
    /// The form was submitted. The adapter suppresses the default navigation.
    Submit,
    /// A key went down while the success indicator had focus
    SuccessKeyDown(String),
}

/// Something that delivers [`FormEvent`]s, one at a time, each handler
/// running to completion before the next event.
pub trait EventSource {
    fn listen(&self, listener: Rc<dyn Fn(FormEvent)>);
}

/// Where the submit flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Rejected,
    /// Valid submission accepted, completion pending
    Accepting,
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; `focused` is the first invalid field
    Rejected { focused: Option<FieldId> },
    /// Every field passed; completion runs after the submit delay
    Accepted,
    /// A previous submission is still completing
    Busy,
}

struct Inner<E> {
    elements: ContactElements<E>,
    scheduler: Rc<dyn Scheduler>,
    config: FormConfig,
    state: Cell<SubmitState>,
}

/// The contact form validator.
///
/// Holds every element handle it touches, acquired once. Validity is never
/// cached: each event re-reads the inputs. Cloning yields another handle to
/// the same component.
pub struct ContactForm<E> {
    inner: Rc<Inner<E>>,
}

impl<E> Clone for ContactForm<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Element> ContactForm<E> {
    pub fn new(
        elements: ContactElements<E>,
        scheduler: Rc<dyn Scheduler>,
        config: FormConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                elements,
                scheduler,
                config,
                state: Cell::new(SubmitState::Idle),
            }),
        }
    }

    /// Locate the markup on `doc`, build the component and initialize it
    pub fn mount<D>(
        doc: &D,
        scheduler: Rc<dyn Scheduler>,
        config: FormConfig,
    ) -> Result<Self, MountError>
    where
        D: Document<Element = E>,
    {
        let elements = ContactElements::locate(doc)?;
        let form = Self::new(elements, scheduler, config);
        form.initialize();
        info!(
            submit_delay_ms = form.inner.config.submit_delay_ms,
            "contact form mounted"
        );
        Ok(form)
    }

    /// Register [`ContactForm::handle`] with an event source
    pub fn attach(&self, source: &impl EventSource) {
        let form = self.clone();
        source.listen(Rc::new(move |event| form.handle(event)));
    }

    pub fn elements(&self) -> &ContactElements<E> {
        &self.inner.elements
    }

    pub fn state(&self) -> SubmitState {
        self.inner.state.get()
    }

    /// Hide every error slot, whatever the markup says
    pub fn initialize(&self) {
        for field in FieldId::ALL {
            self.inner.elements.error_slot(field).set_visible(false);
        }
    }

    pub fn handle(&self, event: FormEvent) {
        match event {
            FormEvent::Input(field) | FormEvent::Blur(field) => {
                self.validate_field(field);
            }
            FormEvent::Submit => {
                self.handle_submit();
            }
            FormEvent::SuccessKeyDown(key) => {
                self.dismiss_success(&key);
            }
        }
    }

    /// Re-check one field and update its error slot. Returns true if valid.
    pub fn validate_field(&self, field: FieldId) -> bool {
        let value = self.inner.elements.input(field).value();
        self.clear_error(field);

        let result = check_field(field, &value, &self.inner.config.rules());
        match result.error() {
            Some(err) => {
                debug!(%field, error = %err, "field invalid");
                self.show_error(field, err);
                false
            }
            None => {
                debug!(%field, "field valid");
                true
            }
        }
    }

    /// Check all four fields. Every field is checked even after a failure so
    /// all errors appear at once.
    pub fn validate_all(&self) -> bool {
        FieldId::ALL
            .into_iter()
            .fold(true, |ok, field| self.validate_field(field) && ok)
    }

    pub fn clear_error(&self, field: FieldId) {
        let slot = self.inner.elements.error_slot(field);
        slot.set_text("");
        slot.set_visible(false);

        let input = self.inner.elements.input(field);
        input.remove_attribute(ARIA_DESCRIBEDBY);
        input.remove_attribute(ARIA_INVALID);
    }

    pub fn clear_all_errors(&self) {
        for field in FieldId::ALL {
            self.clear_error(field);
        }
    }

    /// First field, in document order, whose input is marked invalid
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|&field| {
            self.inner
                .elements
                .input(field)
                .attribute(ARIA_INVALID)
                .is_some_and(|v| v == "true")
        })
    }

    /// Handle a submit attempt.
    ///
    /// A rejected attempt focuses the first invalid field. An accepted one
    /// disables the submit control and schedules completion after the
    /// configured delay; the fields stay editable meanwhile.
    pub fn handle_submit(&self) -> SubmitOutcome {
        if self.state() == SubmitState::Accepting {
            warn!("submit ignored, previous submission still completing");
            return SubmitOutcome::Busy;
        }

        self.clear_all_errors();
        self.inner.elements.success.set_visible(false);
        self.transition(SubmitState::Validating);

        if !self.validate_all() {
            self.transition(SubmitState::Rejected);
            let focused = self.first_invalid();
            if let Some(field) = focused {
                self.inner.elements.input(field).focus();
            }
            self.transition(SubmitState::Idle);
            return SubmitOutcome::Rejected { focused };
        }

        self.transition(SubmitState::Accepting);
        self.inner.elements.submit.set_disabled(true);

        let delay = self.inner.config.submit_delay();
        let form = self.clone();
        self.inner
            .scheduler
            .schedule_once(delay, Box::new(move || form.complete_submission()));

        info!(delay_ms = delay.as_millis() as u64, "submission accepted");
        SubmitOutcome::Accepted
    }

    /// Hide the success indicator on the dismiss key. Returns true if hidden.
    pub fn dismiss_success(&self, key: &str) -> bool {
        if key != DISMISS_KEY {
            return false;
        }
        self.inner.elements.success.set_visible(false);
        debug!("success indicator dismissed");
        true
    }

    fn complete_submission(&self) {
        for field in FieldId::ALL {
            self.inner.elements.input(field).set_value("");
        }
        self.clear_all_errors();

        let success = &self.inner.elements.success;
        success.set_visible(true);
        success.focus();

        self.inner.elements.submit.set_disabled(false);
        self.transition(SubmitState::Idle);
        info!("submission completed");
    }

    fn show_error(&self, field: FieldId, err: &FieldError) {
        let slot = self.inner.elements.error_slot(field);
        slot.set_text(&err.to_string());
        slot.set_visible(true);

        let input = self.inner.elements.input(field);
        input.set_attribute(ARIA_DESCRIBEDBY, field.error_slot_id());
        input.set_attribute(ARIA_INVALID, "true");
    }

    fn transition(&self, to: SubmitState) {
        let from = self.inner.state.replace(to);
        debug!(?from, ?to, "submit state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Locator;
    use crate::testing::{FakeDocument, FakeElement, ManualScheduler};
    use pretty_assertions::assert_eq;

    fn mounted() -> (FakeDocument, ManualScheduler, ContactForm<FakeElement>) {
        let doc = FakeDocument::contact_page();
        let scheduler = ManualScheduler::new();
        let form = ContactForm::mount(&doc, Rc::new(scheduler.clone()), FormConfig::default())
            .unwrap();
        (doc, scheduler, form)
    }

    #[test]
    fn test_mount_hides_error_slots() {
        let doc = FakeDocument::contact_page();
        assert!(doc.is_visible(&Locator::Id("test-contact-error-name")));

        let _form =
            ContactForm::mount(&doc, Rc::new(ManualScheduler::new()), FormConfig::default())
                .unwrap();
        for field in FieldId::ALL {
            assert!(!doc.is_visible(&Locator::Id(field.error_slot_id())));
        }
    }

    #[test]
    fn test_mount_fails_without_submit() {
        let doc = FakeDocument::contact_page();
        doc.remove(&Locator::TestId(crate::dom::SUBMIT_KEY));

        let err = ContactForm::mount(&doc, Rc::new(ManualScheduler::new()), FormConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, MountError::MissingElement { .. }));
    }

    #[test]
    fn test_validate_field_shows_and_clears_error() {
        let (doc, _, form) = mounted();
        let name_input = Locator::TestId(FieldId::Name.input_key());
        let name_slot = Locator::Id(FieldId::Name.error_slot_id());

        assert!(!form.validate_field(FieldId::Name));
        assert!(doc.is_visible(&name_slot));
        assert_eq!(doc.text(&name_slot), "This field is required.");
        assert_eq!(doc.attribute(&name_input, ARIA_INVALID).as_deref(), Some("true"));
        assert_eq!(
            doc.attribute(&name_input, ARIA_DESCRIBEDBY).as_deref(),
            Some("test-contact-error-name")
        );

        doc.type_into(FieldId::Name, "Jane");
        assert!(form.validate_field(FieldId::Name));
        assert!(!doc.is_visible(&name_slot));
        assert_eq!(doc.text(&name_slot), "");
        assert_eq!(doc.attribute(&name_input, ARIA_INVALID), None);
        assert_eq!(doc.attribute(&name_input, ARIA_DESCRIBEDBY), None);
    }

    #[test]
    fn test_validate_all_does_not_short_circuit() {
        let (doc, _, form) = mounted();
        assert!(!form.validate_all());
        for field in FieldId::ALL {
            assert!(doc.is_visible(&Locator::Id(field.error_slot_id())), "{field}");
        }
    }

    #[test]
    fn test_first_invalid_follows_document_order() {
        let (doc, _, form) = mounted();
        doc.type_into(FieldId::Name, "Jane");
        doc.type_into(FieldId::Email, "jane@example.com");
        form.validate_all();
        assert_eq!(form.first_invalid(), Some(FieldId::Subject));
    }

    #[test]
    fn test_dismiss_only_on_escape() {
        let (doc, _, form) = mounted();
        let success = Locator::TestId(crate::dom::SUCCESS_KEY);
        form.elements().success.set_visible(true);

        assert!(!form.dismiss_success("Enter"));
        assert!(doc.is_visible(&success));

        form.handle(FormEvent::SuccessKeyDown("Escape".to_string()));
        assert!(!doc.is_visible(&success));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_submit_while_accepting_is_busy() {
        let (doc, scheduler, form) = mounted();
        doc.type_into(FieldId::Name, "Jane Doe");
        doc.type_into(FieldId::Email, "jane@example.com");
        doc.type_into(FieldId::Subject, "Hello");
        doc.type_into(FieldId::Message, "This is a message.");

        assert_eq!(form.handle_submit(), SubmitOutcome::Accepted);
        assert_eq!(form.state(), SubmitState::Accepting);
        assert_eq!(form.handle_submit(), SubmitOutcome::Busy);
        assert_eq!(scheduler.pending(), 1);
    }
}
