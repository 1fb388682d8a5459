//! Contact form WASM
//!
//! Browser bindings for the contact form: mounts the validator on the host
//! page, wires DOM events to it, and runs the time display. The rules are the
//! same ones the CLI and tests exercise.

use std::rc::Rc;

use contact_form_core::{
    check_field, is_valid_email, ContactForm, FieldId, FormConfig, MountError, TimeDisplay,
};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod events;
pub mod timer;

use dom::WebDocument;
use events::DomEventSource;
use timer::{JsClock, WindowScheduler};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn report(err: MountError) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

// `undefined` and `null` mean defaults
fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn page() -> Result<(web_sys::Window, WebDocument), JsValue> {
    let window = web_sys::window().ok_or_else(|| report(MountError::NoDocument))?;
    let document = window
        .document()
        .ok_or_else(|| report(MountError::NoDocument))?;
    Ok((window, WebDocument::new(document)))
}

/// Mount the contact form on the current page
///
/// # Arguments
/// * `config` - optional `{ submitDelayMs, minMessageChars }`; `undefined`
///   or `null` uses the defaults
///
/// # Example (JavaScript)
/// ```javascript
/// mountContactForm({ submitDelayMs: 250 });
/// ```
#[wasm_bindgen(js_name = mountContactForm)]
pub fn mount_contact_form(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;

    let (window, doc) = page()?;
    let scheduler = Rc::new(WindowScheduler::new(window));
    let form = ContactForm::mount(&doc, scheduler, config).map_err(report)?;

    let events = DomEventSource::new(form.elements().clone());
    form.attach(&events);
    Ok(())
}

/// Show the current epoch milliseconds in `#currentTime`, updated every second
#[wasm_bindgen(js_name = startClock)]
pub fn start_clock() -> Result<(), JsValue> {
    let (window, doc) = page()?;
    let display = TimeDisplay::locate(&doc, JsClock).map_err(report)?;
    display.start(&WindowScheduler::new(window));
    Ok(())
}

/// Check a single value against a field's rules
///
/// `config` takes the same object as `mountContactForm`, so pass the mounted
/// form's config to get the same verdict; omitted, the default rules apply.
/// Returns the error message, or `undefined` when the value passes.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(
    field: &str,
    value: &str,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let field: FieldId = field
        .parse()
        .map_err(|e: contact_form_core::UnknownField| JsValue::from_str(&e.to_string()))?;
    let config = parse_config(config)?;
    Ok(check_field(field, value, &config.rules()).message())
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    is_valid_email(email)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("a@b.co"));
        assert!(!is_valid_email_js("not-an-email"));
    }

    #[wasm_bindgen_test]
    fn test_validate_field() {
        assert_eq!(validate_field_js("name", "Jane", JsValue::UNDEFINED).unwrap(), None);
        assert_eq!(
            validate_field_js("message", "short", JsValue::NULL)
                .unwrap()
                .as_deref(),
            Some("Message must be at least 10 characters.")
        );
        assert!(validate_field_js("phone", "123", JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_validate_field_uses_given_config() {
        let config = FormConfig {
            min_message_chars: 3,
            ..FormConfig::default()
        };
        let config = serde_wasm_bindgen::to_value(&config).unwrap();
        assert_eq!(validate_field_js("message", "short", config.clone()).unwrap(), None);
        assert_eq!(
            validate_field_js("message", "ab", config).unwrap().as_deref(),
            Some("Message must be at least 3 characters.")
        );
    }
}
