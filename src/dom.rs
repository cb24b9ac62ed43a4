//! Thin helpers over `web_sys` for element lookup, styles and event listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{Result, SiteError};

/// An event listener that is removed from its target when dropped.
pub struct EventBinding {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(SiteError::NoDocument)
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// First element matching `selector`; an invalid selector counts as no match.
pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(_) => {
            log::debug!("invalid selector {:?}", selector);
            None
        }
    }
}

pub fn query_html_in(parent: &Element, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("failed to set {} on #{}", property, el.id());
    }
}

pub fn set_display(el: &HtmlElement, value: &str) {
    set_style(el, "display", value);
}

pub fn style_value(el: &HtmlElement, property: &str) -> String {
    match el.style().get_property_value(property) {
        Ok(value) => value,
        Err(_) => {
            log::warn!("failed to read {} on #{}", property, el.id());
            String::new()
        }
    }
}
