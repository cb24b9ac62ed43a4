//! Drag-to-pan map widget.
//!
//! The map image is rendered larger than its container and moved with
//! `left`/`top` percentages. Mouse and single-finger touch drive the same
//! [`PanState`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::config::SiteConfig;
use crate::dom::{EventBinding, html_by_id, query_html_in, set_style, style_value};
use crate::error::Result;
use crate::model::{MAP_ID, MAP_IMAGE_SELECTOR};
use crate::state::PanState;

pub struct PanViewport {
    _bindings: Vec<EventBinding>,
}

impl PanViewport {
    /// Binds `#interactiveMap` and its `.map-image`; `None` when either is missing.
    pub fn bind(document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let Some(viewport) = html_by_id(document, MAP_ID) else {
            return Ok(None);
        };
        let Some(content) = query_html_in(&viewport, MAP_IMAGE_SELECTOR) else {
            log::debug!("#{} has no {}", MAP_ID, MAP_IMAGE_SELECTOR);
            return Ok(None);
        };
        Self::new(viewport, content, config).map(Some)
    }

    pub fn new(viewport: HtmlElement, content: HtmlElement, config: &SiteConfig) -> Result<Self> {
        let state = Rc::new(RefCell::new(PanState::new(
            config.map_content_scale,
            config.map_default_offset_percent,
        )));
        set_style(&viewport, "cursor", "grab");

        let mut bindings = Vec::with_capacity(7);
        // Mouse events
        {
            let state = state.clone();
            let viewport_el = viewport.clone();
            let content = content.clone();
            bindings.push(EventBinding::new(viewport.as_ref(), "mousedown", move |e: Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                begin_drag(
                    &state,
                    &viewport_el,
                    &content,
                    e.client_x() as f64,
                    e.client_y() as f64,
                );
                e.prevent_default();
            })?);
        }
        {
            let state = state.clone();
            let content = content.clone();
            bindings.push(EventBinding::new(viewport.as_ref(), "mousemove", move |e: Event| {
                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                    drag(&state, &content, e.client_x() as f64, e.client_y() as f64);
                }
            })?);
        }
        for kind in ["mouseup", "mouseleave"] {
            let state = state.clone();
            let viewport_el = viewport.clone();
            bindings.push(EventBinding::new(viewport.as_ref(), kind, move |_e: Event| {
                end_drag(&state, &viewport_el);
            })?);
        }
        // Touch events
        {
            let state = state.clone();
            let viewport_el = viewport.clone();
            let content = content.clone();
            bindings.push(EventBinding::new(viewport.as_ref(), "touchstart", move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let touches = e.touches();
                if touches.length() != 1 {
                    end_drag(&state, &viewport_el);
                    return;
                }
                if let Some(t) = touches.get(0) {
                    begin_drag(
                        &state,
                        &viewport_el,
                        &content,
                        t.client_x() as f64,
                        t.client_y() as f64,
                    );
                    e.prevent_default();
                }
            })?);
        }
        {
            let state = state.clone();
            let content = content.clone();
            bindings.push(EventBinding::new(viewport.as_ref(), "touchmove", move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if !state.borrow().is_dragging() {
                    return;
                }
                if let Some(t) = e.touches().get(0) {
                    drag(&state, &content, t.client_x() as f64, t.client_y() as f64);
                    e.prevent_default();
                }
            })?);
        }
        {
            let state = state.clone();
            let viewport_el = viewport.clone();
            let on_touch_end = move |_e: Event| end_drag(&state, &viewport_el);
            bindings.push(EventBinding::new(viewport.as_ref(), "touchend", on_touch_end.clone())?);
            bindings.push(EventBinding::new(viewport.as_ref(), "touchcancel", on_touch_end)?);
        }

        Ok(Self {
            _bindings: bindings,
        })
    }
}

fn begin_drag(
    state: &RefCell<PanState>,
    viewport: &HtmlElement,
    content: &HtmlElement,
    x: f64,
    y: f64,
) {
    let session = state.borrow_mut().begin(
        x,
        y,
        viewport.offset_width() as f64,
        viewport.offset_height() as f64,
        &style_value(content, "left"),
        &style_value(content, "top"),
    );
    set_style(viewport, "cursor", "grabbing");
    log::trace!(
        "map drag start at ({}, {}) offset {:?}",
        x,
        y,
        session.offset
    );
}

fn drag(state: &RefCell<PanState>, content: &HtmlElement, x: f64, y: f64) {
    let Some(percent) = state.borrow_mut().drag_to(x, y) else {
        return;
    };
    set_style(content, "left", &format!("{}%", percent.left));
    set_style(content, "top", &format!("{}%", percent.top));
}

fn end_drag(state: &RefCell<PanState>, viewport: &HtmlElement) {
    if state.borrow_mut().end() {
        set_style(viewport, "cursor", "grab");
    }
}
