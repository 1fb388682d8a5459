//! Host page markup
//!
//! Renders the static contact page with maud. The markup carries every
//! element the wasm bundle looks up, so a page rendered here always mounts.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::Config;
use crate::dom::{FORM_ID, SUBMIT_KEY, SUCCESS_KEY};
use crate::field::FieldId;
use crate::time_display::TIME_SLOT_ID;

/// Path the page loads the wasm-bindgen output from
pub const BUNDLE_PATH: &str = "./pkg/contact_form_wasm.js";

fn label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Name",
        FieldId::Email => "Email",
        FieldId::Subject => "Subject",
        FieldId::Message => "Message",
    }
}

fn field_row(field: FieldId) -> Markup {
    let input_id = format!("contact-{}", field.as_str());
    html! {
        div class="field" {
            label for=(input_id) { (label(field)) }
            @match field {
                FieldId::Message => {
                    textarea id=(input_id) name=(field.as_str()) rows="5"
                        aria-required="true" data-testid=(field.input_key()) {}
                }
                FieldId::Email => {
                    input id=(input_id) name=(field.as_str()) type="email"
                        aria-required="true" data-testid=(field.input_key());
                }
                _ => {
                    input id=(input_id) name=(field.as_str()) type="text"
                        aria-required="true" data-testid=(field.input_key());
                }
            }
            p id=(field.error_slot_id()) class="error" role="alert" {}
        }
    }
}

fn boot_script(config: &Config) -> Markup {
    let script = format!(
        "import init, {{ mountContactForm, startClock }} from '{}';\n\
         await init();\n\
         mountContactForm({{ submitDelayMs: {}, minMessageChars: {} }});\n\
         startClock();",
        BUNDLE_PATH, config.form.submit_delay_ms, config.form.min_message_chars
    );
    html! { script type="module" { (PreEscaped(script)) } }
}

/// The whole contact page
pub fn contact_page(config: &Config) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Contact" }
            }
            body {
                main {
                    h1 { "Contact us" }
                    form id=(FORM_ID) novalidate {
                        @for field in FieldId::ALL {
                            (field_row(field))
                        }
                        button type="submit" data-testid=(SUBMIT_KEY) { "Send" }
                    }
                    div data-testid=(SUCCESS_KEY) role="status" aria-live="polite"
                        tabindex="-1" hidden {
                        "Thanks! Your message has been sent."
                    }
                    p { "Current time: " span id=(TIME_SLOT_ID) {} }
                }
                (boot_script(config))
            }
        }
    }
}
