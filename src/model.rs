//! Page element names and reservation data.

use serde::Serialize;
use std::collections::BTreeMap;

// Element ids, selectors and classes the pages are written with.
pub const HEADER_SELECTOR: &str = "header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-button";
pub const MENU_ITEM_SELECTOR: &str = ".menu-item-card";
pub const ALL_FILTER_BUTTON_SELECTOR: &str = ".filter-button[data-category=\"all\"]";
pub const CATEGORY_ATTR: &str = "data-category";
pub const ACTIVE_CLASS: &str = "active";
pub const RESERVATION_FORM_ID: &str = "reservationForm";
pub const CONFIRMATION_ID: &str = "confirmationMessage";
pub const MODAL_ID: &str = "reservationModal";
pub const BOOK_TABLE_BUTTON_ID: &str = "bookTableBtn";
pub const BOOK_EVENT_BUTTON_ID: &str = "bookEventBtn";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-button";
pub const MODAL_FORM_ID: &str = "modalReservationForm";
pub const MODAL_CONFIRMATION_ID: &str = "modalConfirmationMessage";
pub const MAP_ID: &str = "interactiveMap";
pub const MAP_IMAGE_SELECTOR: &str = ".map-image";
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// The reservation page's inline form.
    Main,
    /// The form inside the reservation modal.
    Modal,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            FormKind::Main => "Main Form",
            FormKind::Modal => "Modal Form",
        }
    }
}

/// Submitted reservation fields keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReservationDetails(pub BTreeMap<String, String>);

impl ReservationDetails {
    /// Later entries for the same name replace earlier ones.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn log_line(&self, kind: FormKind) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".into());
        format!("Reservation Details ({}): {}", kind.label(), json)
    }
}
