use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FormData, HtmlElement, HtmlFormElement};
use yew::platform::spawn_local;
use yew::platform::time::sleep;

use crate::config::SiteConfig;
use crate::dom::{EventBinding, html_by_id, set_display};
use crate::error::Result;
use crate::model::{CONFIRMATION_ID, FormKind, RESERVATION_FORM_ID, ReservationDetails};
use crate::state::ConfirmationGate;

/// A reservation form that confirms locally instead of submitting.
///
/// On submit the entered details are logged, the confirmation is shown and
/// the form cleared. After `hide_after` the confirmation (and the modal, for
/// the modal form) is hidden again unless a newer submission happened.
pub struct ReservationForm {
    _binding: EventBinding,
}

impl ReservationForm {
    /// The page form on the reservation page.
    pub fn bind_main(document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let form = document
            .get_element_by_id(RESERVATION_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let (Some(form), Some(confirmation)) = (form, html_by_id(document, CONFIRMATION_ID)) else {
            return Ok(None);
        };
        Self::new(
            FormKind::Main,
            form,
            confirmation,
            None,
            Rc::new(ConfirmationGate::default()),
            Duration::from_millis(config.confirmation_hide_ms),
        )
        .map(Some)
    }

    pub fn new(
        kind: FormKind,
        form: HtmlFormElement,
        confirmation: HtmlElement,
        modal: Option<HtmlElement>,
        gate: Rc<ConfirmationGate>,
        hide_after: Duration,
    ) -> Result<Self> {
        let target = form.clone();
        let binding = EventBinding::new(target.as_ref(), "submit", move |e: Event| {
            e.prevent_default();
            let details = collect_details(&form);
            log::info!("{}", details.log_line(kind));

            set_display(&confirmation, "block");
            form.reset();

            let ticket = gate.arm();
            let gate = gate.clone();
            let confirmation = confirmation.clone();
            let modal = modal.clone();
            spawn_local(async move {
                sleep(hide_after).await;
                if !gate.is_current(ticket) {
                    return;
                }
                if let Some(modal) = &modal {
                    set_display(modal, "none");
                }
                set_display(&confirmation, "none");
            });
        })?;
        Ok(Self { _binding: binding })
    }
}

pub fn collect_details(form: &HtmlFormElement) -> ReservationDetails {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("could not read form data: {:?}", e);
            return ReservationDetails::default();
        }
    };
    let entries = match js_sys::try_iter(&data) {
        Ok(Some(entries)) => entries,
        _ => return ReservationDetails::default(),
    };
    ReservationDetails::from_entries(entries.filter_map(|entry| {
        let pair = js_sys::Array::from(&entry.ok()?);
        let name = pair.get(0).as_string()?;
        // file inputs have no string value
        let value = pair.get(1).as_string().unwrap_or_default();
        Some((name, value))
    }))
}
