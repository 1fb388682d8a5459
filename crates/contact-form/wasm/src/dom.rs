// File: contact-form/wasm/src/dom.rs
// Purpose: web-sys implementations of the document and element ports

use contact_form_core::{Document, Element, Locator};
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// A live page element
#[derive(Debug, Clone)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn as_html(&self) -> &HtmlElement {
        &self.0
    }

    fn set_display(&self, display: &str) {
        if let Err(err) = self.0.style().set_property("display", display) {
            web_sys::console::warn_1(&err);
        }
    }
}

impl Element for DomElement {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    // Both the hidden flag and inline display, so stylesheets that override
    // one of them still hide the element.
    fn set_visible(&self, visible: bool) {
        self.0.set_hidden(!visible);
        self.set_display(if visible { "block" } else { "none" });
    }

    fn is_visible(&self) -> bool {
        !self.0.hidden()
            && self
                .0
                .style()
                .get_property_value("display")
                .map_or(true, |display| display != "none")
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            web_sys::console::warn_1(&err);
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = self.0.remove_attribute(name) {
            web_sys::console::warn_1(&err);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            self.set_attribute("disabled", "");
        } else {
            self.remove_attribute("disabled");
        }
    }

    fn focus(&self) {
        if let Err(err) = self.0.focus() {
            web_sys::console::warn_1(&err);
        }
    }
}

/// The browser document
#[derive(Debug, Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Document for WebDocument {
    type Element = DomElement;

    fn find(&self, locator: &Locator) -> Option<DomElement> {
        let element = match locator {
            Locator::Id(id) => self.0.get_element_by_id(id),
            Locator::TestId(_) => self.0.query_selector(&locator.selector()).ok().flatten(),
        }?;
        element.dyn_into::<HtmlElement>().ok().map(DomElement)
    }
}
