//! Contact form core
//!
//! Field rules, error-state rendering and submit gating for the contact page.
//! Nothing here touches the browser directly: the page is reached through the
//! [`Document`]/[`Element`] ports, time through [`Scheduler`]/[`Clock`], and
//! user input through [`EventSource`]. The `contact-form-wasm` crate provides
//! the browser adapters; [`testing`] provides in-memory ones.

pub mod config;
pub mod dom;
pub mod error;
pub mod field;
pub mod form;
pub mod markup;
pub mod rules;
pub mod schedule;
pub mod testing;
pub mod time_display;

pub use config::{Config, FormConfig};
pub use dom::{ContactElements, Document, Element, Locator, FORM_ID, SUBMIT_KEY, SUCCESS_KEY};
pub use error::{MountError, UnknownField};
pub use field::FieldId;
pub use form::{ContactForm, EventSource, FormEvent, SubmitOutcome, SubmitState};
pub use rules::{check_field, is_empty, is_valid_email, FieldError, RuleConfig, ValidationResult};
pub use schedule::{Clock, Scheduler, SystemClock};
pub use time_display::{TimeDisplay, TIME_SLOT_ID};
