//! Scroll reveal: one shared IntersectionObserver marking content blocks
//! as they enter the viewport

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::interactions::RevealOptions;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns the observer and its callback. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Observe every element matching the reveal selector.
    /// None when the page has no such elements.
    pub fn observe(document: &Document, options: RevealOptions) -> Result<Option<Self>, JsValue> {
        let list = document.query_selector_all(options.selector)?;
        let targets: Vec<Element> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if targets.is_empty() {
            debug!("Nothing to reveal, skipping");
            return Ok(None);
        }

        let class = options.class;
        let on_entries = move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Err(e) = entry.target().class_list().add_1(class) {
                    warn!(?e, "Failed to mark revealed element");
                }
            }
        };
        let callback: EntriesCallback = Closure::wrap(
            Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in &targets {
            observer.observe(target);
        }
        debug!(observed = targets.len(), "Reveal observer started");

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
