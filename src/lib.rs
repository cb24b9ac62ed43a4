//! Client-side interactivity for the restaurant website.
//!
//! Every page loads the same wasm module. At start it binds whichever
//! features have their elements on the current page: smooth anchor
//! scrolling, the menu filter, the reservation forms and modal, and the
//! draggable location map.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;

use components::{MenuFilter, PanViewport, ReservationForm, ReservationModal, SmoothScroll};
use config::SiteConfig;
use error::Result;

/// All feature controllers bound on the current page.
pub struct Site {
    pub scroll: Option<SmoothScroll>,
    pub menu: Option<MenuFilter>,
    pub reservation: Option<ReservationForm>,
    pub modal: Option<ReservationModal>,
    pub map: Option<PanViewport>,
}

impl Site {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            scroll: SmoothScroll::bind(window, document, config)?,
            menu: MenuFilter::bind(document)?,
            reservation: ReservationForm::bind_main(document, config)?,
            modal: ReservationModal::bind(window, document, config)?,
            map: PanViewport::bind(document, config)?,
        })
    }

    pub fn features(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.scroll.is_some() {
            out.push("smooth-scroll");
        }
        if self.menu.is_some() {
            out.push("menu-filter");
        }
        if self.reservation.is_some() {
            out.push("reservation-form");
        }
        if self.modal.is_some() {
            out.push("reservation-modal");
        }
        if self.map.is_some() {
            out.push("map-pan");
        }
        out
    }
}

thread_local! {
    // listeners stay bound for the life of the page
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn run() -> Result<Site> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = SiteConfig::load(&document);
    log::set_max_level(config.log_level.to_level_filter());
    Site::bind(&window, &document, &config)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // the logger accepts everything; `log::max_level` does the filtering
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    match run() {
        Ok(site) => {
            log::info!("site script ready: [{}]", site.features().join(", "));
            SITE.with(|slot| *slot.borrow_mut() = Some(site));
        }
        Err(e) => log::error!("site script disabled: {}", e),
    }
}
