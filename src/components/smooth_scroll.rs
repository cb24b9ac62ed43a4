use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::dom::{EventBinding, query_all_html, query_html};
use crate::error::Result;
use crate::model::{ANCHOR_SELECTOR, HEADER_SELECTOR};
use crate::state::{anchor_selector, scroll_target};

/// Smooth scrolling for same-page `#fragment` links, stopping below the fixed header.
pub struct SmoothScroll {
    _bindings: Vec<EventBinding>,
}

impl SmoothScroll {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let anchors = query_all_html(document, ANCHOR_SELECTOR);
        if anchors.is_empty() {
            return Ok(None);
        }
        let header = query_html(document, HEADER_SELECTOR);
        let behavior = config.scroll_behavior.behavior();

        let mut bindings = Vec::with_capacity(anchors.len());
        for anchor in &anchors {
            let window = window.clone();
            let document = document.clone();
            let header = header.clone();
            let link = anchor.clone();
            bindings.push(EventBinding::new(anchor.as_ref(), "click", move |e: Event| {
                let href = link.get_attribute("href").unwrap_or_default();
                if !href.starts_with('#') {
                    return;
                }
                e.prevent_default();
                scroll_to_anchor(&window, &document, header.as_ref(), &href, behavior);
            })?);
        }
        log::debug!("smooth scroll bound to {} links", bindings.len());
        Ok(Some(Self {
            _bindings: bindings,
        }))
    }
}

fn scroll_to_anchor(
    window: &Window,
    document: &Document,
    header: Option<&HtmlElement>,
    href: &str,
    behavior: ScrollBehavior,
) {
    let Some(selector) = anchor_selector(href) else {
        return;
    };
    // ids that are not valid selectors behave like missing targets
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return;
    };
    let header_height = header.map(|h| h.offset_height() as f64).unwrap_or(0.0);
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_target(target.get_bounding_client_rect().top(), page_y, header_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
    log::debug!("scrolling to {} at {}", selector, top);
}
