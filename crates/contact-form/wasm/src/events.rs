// File: contact-form/wasm/src/events.rs
// Purpose: Turns DOM events on the contact form into FormEvents

use std::rc::Rc;

use contact_form_core::{ContactElements, EventSource, FieldId, FormEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use crate::dom::DomElement;

/// Listeners are registered for the life of the page and never removed
pub struct DomEventSource {
    elements: ContactElements<DomElement>,
}

impl DomEventSource {
    pub fn new(elements: ContactElements<DomElement>) -> Self {
        Self { elements }
    }
}

fn on(target: &HtmlElement, kind: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
    callback.forget();
}

impl EventSource for DomEventSource {
    fn listen(&self, listener: Rc<dyn Fn(FormEvent)>) {
        for field in FieldId::ALL {
            let input = self.elements.input(field).as_html();

            let l = Rc::clone(&listener);
            on(input, "input", move |_| l(FormEvent::Input(field)));
            let l = Rc::clone(&listener);
            on(input, "blur", move |_| l(FormEvent::Blur(field)));
        }

        let l = Rc::clone(&listener);
        on(self.elements.form.as_html(), "submit", move |event| {
            event.prevent_default();
            l(FormEvent::Submit);
        });

        on(self.elements.success.as_html(), "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                listener(FormEvent::SuccessKeyDown(key_event.key()));
            }
        });
    }
}
