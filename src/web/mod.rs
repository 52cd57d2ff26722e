//! Browser bindings: canvas surfaces, frame scheduling, DOM wiring

mod animation;
mod canvas;
mod events;
mod host;
mod interactions;
mod reveal;
mod styles;

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::core::interactions::RevealOptions;
use crate::core::{FxConfig, Page, RadarView};
use animation::RafLoop;
use canvas::CanvasSurface;
use events::Listener;
use host::DomHost;
use reveal::RevealObserver;

/// Everything the page owns. Dropping it stops the animation and removes
/// every listener.
pub struct WebPage {
    #[allow(dead_code)]
    listeners: Vec<Listener>,
    animation: Option<RafLoop>,
    #[allow(dead_code)]
    radar: Option<RadarView<CanvasSurface>>,
    #[allow(dead_code)]
    reveal: Option<RevealObserver>,
}

impl WebPage {
    pub fn start(config: &FxConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        styles::ensure_style(&document, styles::NAV_STYLES_ID, styles::NAV_STYLES)?;
        styles::ensure_style(&document, styles::REVEAL_STYLES_ID, styles::REVEAL_STYLES)?;

        let mut listeners = Vec::new();
        listeners.extend(interactions::show_loading_screen(&window, &document)?);

        let host = DomHost::new(window.clone(), document.clone());
        let mut rng = rand::thread_rng();
        let Page { particles, radar } = Page::bootstrap(&host, config, &mut rng);

        let animation = match particles {
            Some(particles) => {
                let particles = Rc::new(RefCell::new(particles));

                let on_resize = {
                    let particles = particles.clone();
                    let window = window.clone();
                    move |_| {
                        let (w, h) = host::viewport(&window);
                        particles.borrow_mut().resize(w, h);
                    }
                };
                listeners.push(Listener::new(&window, "resize", on_resize)?);

                Some(RafLoop::start(window.clone(), particles)?)
            }
            None => None,
        };

        listeners.extend(interactions::wire_navigation(&window, &document)?);
        listeners.extend(interactions::wire_project_filter(&document)?);
        listeners.extend(interactions::wire_contact_form(&window, &document)?);
        interactions::set_current_year(&document);
        let reveal = RevealObserver::observe(&document, RevealOptions::default())?;

        info!(
            listeners = listeners.len(),
            animated = animation.is_some(),
            revealing = reveal.is_some(),
            "Page started"
        );

        Ok(Self {
            listeners,
            animation,
            radar,
            reveal,
        })
    }

    /// Stop the particle animation; listeners stay until drop
    pub fn stop_animation(&self) {
        if let Some(animation) = &self.animation {
            animation.stop();
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<WebPage>> = const { RefCell::new(None) };
}

/// Start all effects with default configuration. Calling again is a no-op.
pub fn start() {
    PAGE.with(|page| {
        if page.borrow().is_some() {
            return;
        }
        match WebPage::start(&FxConfig::default()) {
            Ok(started) => *page.borrow_mut() = Some(started),
            Err(e) => warn!(?e, "Page effects failed to start"),
        }
    });
}

/// Tear everything down: stop the animation loop and unregister listeners
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|page| page.borrow_mut().take());
    if let Some(page) = page {
        page.stop_animation();
        drop(page);
        info!("Page effects torn down");
    }
}
