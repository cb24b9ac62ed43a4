use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement};

use crate::dom::{EventBinding, query_all_html, query_html, set_display};
use crate::error::Result;
use crate::model::{
    ACTIVE_CLASS, ALL_FILTER_BUTTON_SELECTOR, CATEGORY_ATTR, FILTER_BUTTON_SELECTOR,
    MENU_ITEM_SELECTOR,
};
use crate::state::CategoryFilter;

/// Category buttons that show and hide the menu cards.
pub struct MenuFilter {
    _bindings: Vec<EventBinding>,
}

impl MenuFilter {
    /// Needs at least one filter button and one menu card on the page.
    pub fn bind(document: &Document) -> Result<Option<Self>> {
        let buttons = Rc::new(query_all_html(document, FILTER_BUTTON_SELECTOR));
        let items = Rc::new(query_all_html(document, MENU_ITEM_SELECTOR));
        if buttons.is_empty() || items.is_empty() {
            return Ok(None);
        }
        let mut bindings = Vec::with_capacity(buttons.len());
        for button in buttons.iter() {
            let buttons = buttons.clone();
            let items = items.clone();
            let clicked = button.clone();
            bindings.push(EventBinding::new(button.as_ref(), "click", move |_e: Event| {
                let filter =
                    CategoryFilter::from_attr(clicked.get_attribute(CATEGORY_ATTR).as_deref());
                apply_filter(&buttons, &items, Some(&clicked), &filter);
                log::debug!("menu filter {:?}", filter);
            })?);
        }

        let all_button = query_html(document, ALL_FILTER_BUTTON_SELECTOR);
        apply_filter(&buttons, &items, all_button.as_ref(), &CategoryFilter::All);

        Ok(Some(Self {
            _bindings: bindings,
        }))
    }
}

fn apply_filter(
    buttons: &[HtmlElement],
    items: &[HtmlElement],
    active: Option<&HtmlElement>,
    filter: &CategoryFilter,
) {
    for b in buttons {
        if b.class_list().remove_1(ACTIVE_CLASS).is_err() {
            log::warn!("failed to clear .{} on filter button", ACTIVE_CLASS);
        }
    }
    if let Some(b) = active {
        if b.class_list().add_1(ACTIVE_CLASS).is_err() {
            log::warn!("failed to set .{} on filter button", ACTIVE_CLASS);
        }
    }
    for item in items {
        let category = item.get_attribute(CATEGORY_ATTR);
        set_display(item, filter.display_for(category.as_deref()));
    }
}
