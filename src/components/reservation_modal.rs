use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, KeyboardEvent, Window};

use super::reservation_form::ReservationForm;
use crate::config::SiteConfig;
use crate::dom::{EventBinding, html_by_id, query_html, set_display, style_value};
use crate::error::Result;
use crate::model::{
    BOOK_EVENT_BUTTON_ID, BOOK_TABLE_BUTTON_ID, CLOSE_BUTTON_SELECTOR, FormKind,
    MODAL_CONFIRMATION_ID, MODAL_FORM_ID, MODAL_ID,
};
use crate::state::ConfirmationGate;

struct ModalDialog {
    modal: HtmlElement,
    form: Option<HtmlFormElement>,
    confirmation: Option<HtmlElement>,
    gate: Rc<ConfirmationGate>,
}

impl ModalDialog {
    fn open(&self) {
        set_display(&self.modal, "flex");
    }

    fn close(&self) {
        set_display(&self.modal, "none");
        if let Some(c) = &self.confirmation {
            set_display(c, "none");
        }
        if let Some(f) = &self.form {
            f.reset();
        }
        // a pending auto-hide must not close the modal after it is reopened
        self.gate.disarm();
    }

    fn is_open(&self) -> bool {
        style_value(&self.modal, "display") == "flex"
    }
}

/// The "book a table" dialog: open buttons, close button, backdrop click,
/// Escape key and the modal reservation form.
pub struct ReservationModal {
    _form: Option<ReservationForm>,
    _bindings: Vec<EventBinding>,
}

impl ReservationModal {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let Some(modal) = html_by_id(document, MODAL_ID) else {
            return Ok(None);
        };
        let form = document
            .get_element_by_id(MODAL_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let confirmation = html_by_id(document, MODAL_CONFIRMATION_ID);
        let gate = Rc::new(ConfirmationGate::default());
        let dialog = Rc::new(ModalDialog {
            modal: modal.clone(),
            form: form.clone(),
            confirmation: confirmation.clone(),
            gate: gate.clone(),
        });

        let mut bindings = Vec::new();
        for id in [BOOK_TABLE_BUTTON_ID, BOOK_EVENT_BUTTON_ID] {
            if let Some(button) = html_by_id(document, id) {
                let dialog = dialog.clone();
                bindings.push(EventBinding::new(button.as_ref(), "click", move |_e: Event| {
                    dialog.open();
                })?);
            }
        }
        if let Some(close) = query_html(document, CLOSE_BUTTON_SELECTOR) {
            let dialog = dialog.clone();
            bindings.push(EventBinding::new(close.as_ref(), "click", move |_e: Event| {
                dialog.close();
            })?);
        }
        // clicks on the backdrop land on the modal element itself
        {
            let dialog = dialog.clone();
            bindings.push(EventBinding::new(window.as_ref(), "click", move |e: Event| {
                let on_backdrop = e
                    .target()
                    .is_some_and(|t| js_sys::Object::is(t.as_ref(), dialog.modal.as_ref()));
                if on_backdrop {
                    dialog.close();
                }
            })?);
        }
        {
            let dialog = dialog.clone();
            bindings.push(EventBinding::new(window.as_ref(), "keydown", move |e: Event| {
                let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if e.key() == "Escape" && dialog.is_open() {
                    dialog.close();
                }
            })?);
        }

        let form = match (form, confirmation) {
            (Some(form), Some(confirmation)) => Some(ReservationForm::new(
                FormKind::Modal,
                form,
                confirmation,
                Some(modal),
                gate,
                Duration::from_millis(config.confirmation_hide_ms),
            )?),
            _ => None,
        };

        Ok(Some(Self {
            _form: form,
            _bindings: bindings,
        }))
    }
}
