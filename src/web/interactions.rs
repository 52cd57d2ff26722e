//! DOM wiring for navigation, project filter, contact form, loading overlay
//! and footer year
//!
//! State lives in `core::interactions`; handlers here only translate events
//! into state changes and state into classes/styles. Missing elements just
//! skip the feature.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::events::Listener;
use crate::core::interactions::{
    focus_marker, nav_background, scroll_target, FieldEvent, LoadingPhase, NavMenu, ProjectFilter,
    SubmitButton, FILTER_ALL, FOCUSED_CLASS, NAV_BLUR, SUBMIT_RESET_MS,
};

const ACTIVE: &str = "active";

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        warn!(class, ?e, "Failed to toggle class");
    }
}

fn set_active(el: &Element, active: bool) {
    set_class(el, ACTIVE, active);
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        warn!(property, ?e, "Failed to set style");
    }
}

fn clear_style(el: &HtmlElement, property: &str) {
    if let Err(e) = el.style().remove_property(property) {
        warn!(property, ?e, "Failed to clear style");
    }
}

/// Run `f` once after `ms` milliseconds
fn schedule(window: &Window, ms: u32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    ) {
        warn!(?e, ms, "Failed to schedule timeout");
    }
}

fn smooth_scroll_to(document: &Document, selector: &str) -> bool {
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scroll-dependent nav background, smooth in-page scrolling, mobile menu
/// toggle, close-on-link
pub fn wire_navigation(window: &Window, document: &Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();
    let links = query_all(document, ".nav-link");

    for link in &links {
        let Some(selector) = link.get_attribute("href").filter(|h| scroll_target(h).is_some())
        else {
            continue;
        };
        let document = document.clone();
        listeners.push(Listener::new(link, "click", move |event| {
            if smooth_scroll_to(&document, &selector) {
                event.prevent_default();
            }
        })?);
    }

    if let Some(nav) = query_html(document, ".nav") {
        let win = window.clone();
        listeners.push(Listener::new(window, "scroll", move |_| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            set_style(&nav, "background", &nav_background(scroll_y).css());
            set_style(&nav, "backdrop-filter", NAV_BLUR);
        })?);
    }

    let (Some(toggle), Some(menu)) = (
        document.query_selector(".nav-toggle").ok().flatten(),
        document.query_selector(".nav-menu").ok().flatten(),
    ) else {
        debug!("No mobile nav toggle, skipping");
        return Ok(listeners);
    };

    let state = Rc::new(Cell::new(NavMenu::default()));
    let apply = {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        move |open: bool| {
            set_active(&menu, open);
            set_active(&toggle, open);
        }
    };

    {
        let state = state.clone();
        let apply = apply.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| {
            let mut menu = state.get();
            let open = menu.toggle();
            state.set(menu);
            apply(open);
        })?);
    }

    for link in &links {
        let state = state.clone();
        let apply = apply.clone();
        listeners.push(Listener::new(link, "click", move |_| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            apply(false);
        })?);
    }

    Ok(listeners)
}

/// Category buttons showing/hiding project cards
pub fn wire_project_filter(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let buttons = Rc::new(query_all(document, ".filter-btn"));
    let cards = Rc::new(query_all(document, ".project-card"));
    if buttons.is_empty() {
        return Ok(Vec::new());
    }

    let state = Rc::new(RefCell::new(ProjectFilter::default()));
    let mut listeners = Vec::with_capacity(buttons.len());

    for button in buttons.iter() {
        let filter = button
            .get_attribute("data-filter")
            .unwrap_or_else(|| FILTER_ALL.to_string());
        let (state, buttons, cards) = (state.clone(), buttons.clone(), cards.clone());

        listeners.push(Listener::new(button, "click", move |_| {
            let mut state = state.borrow_mut();
            state.select(&filter);

            for card in cards.iter() {
                let category = card.get_attribute("data-category").unwrap_or_default();
                let visible = state.shows(&category);
                if let Some(card) = card.dyn_ref::<HtmlElement>() {
                    set_style(card, "display", if visible { "block" } else { "none" });
                    set_style(card, "opacity", if visible { "1" } else { "0" });
                }
            }
            for b in buttons.iter() {
                let f = b.get_attribute("data-filter").unwrap_or_default();
                set_active(b, state.is_active_button(&f));
            }
        })?);
    }

    Ok(listeners)
}

fn render_button(button: &HtmlButtonElement, state: &SubmitButton) {
    button.set_text_content(Some(state.label()));
    button.set_disabled(state.state().disabled());
    match state.state().background() {
        Some(bg) => set_style(button, "background", bg),
        None => clear_style(button, "background"),
    }
}

/// Contact form: submit into a new tab, reflect progress on the button,
/// restore it after a delay
pub fn wire_contact_form(window: &Window, document: &Document) -> Result<Vec<Listener>, JsValue> {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("No contact form, skipping");
        return Ok(Vec::new());
    };
    let Some(button) = form
        .query_selector(r#"button[type="submit"]"#)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        warn!("Contact form has no submit button");
        return Ok(Vec::new());
    };

    let original = button.text_content().unwrap_or_default();
    let state = Rc::new(RefCell::new(SubmitButton::new(original.trim())));
    let window = window.clone();
    let target_form = form.clone();

    let listener = Listener::new(&form, "submit", move |event| {
        event.prevent_default();
        event.stop_propagation();

        if !state.borrow_mut().begin() {
            return;
        }
        render_button(&button, &state.borrow());

        target_form.set_target("_blank");
        let ok = match target_form.submit() {
            Ok(()) => {
                info!("Contact form submitted");
                true
            }
            Err(e) => {
                warn!(?e, "Contact form submission failed");
                false
            }
        };
        state.borrow_mut().finish(ok);
        render_button(&button, &state.borrow());

        let (state, button, form) = (state.clone(), button.clone(), target_form.clone());
        schedule(&window, SUBMIT_RESET_MS, move || {
            let clear_form = state.borrow_mut().reset();
            render_button(&button, &state.borrow());
            if clear_form {
                form.reset();
            }
        });
    })?;

    let mut listeners = vec![listener];
    listeners.extend(wire_field_focus(document)?);
    Ok(listeners)
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Raise the label of focused or filled form fields
fn wire_field_focus(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();
    for field in query_all(document, ".form-input") {
        for (name, event) in [("focus", FieldEvent::Focus), ("blur", FieldEvent::Blur)] {
            let target = field.clone();
            listeners.push(Listener::new(&field, name, move |_| {
                let Some(parent) = target.parent_element() else {
                    return;
                };
                if let Some(on) = focus_marker(event, &field_value(&target)) {
                    set_class(&parent, FOCUSED_CLASS, on);
                }
            })?);
        }
    }
    Ok(listeners)
}

/// Apply a loading phase to the overlay and schedule the next one
fn advance_loading(window: Window, overlay: HtmlElement, phase: LoadingPhase) {
    let Some((delay, next)) = phase.next() else {
        return;
    };
    let win = window.clone();
    schedule(&window, delay, move || {
        match next {
            LoadingPhase::Fading => set_class(&overlay, "hidden", true),
            LoadingPhase::Removed => {
                set_style(&overlay, "display", "none");
                debug!("Loading overlay removed");
            }
            LoadingPhase::Visible => {}
        }
        advance_loading(win, overlay, next);
    });
}

/// Spinner overlay shown until the page has loaded. Returns the `load`
/// listener when the page is still loading.
pub fn show_loading_screen(
    window: &Window,
    document: &Document,
) -> Result<Option<Listener>, JsValue> {
    let Some(body) = document.body() else {
        return Ok(None);
    };
    let overlay: HtmlElement = document.create_element("div")?.dyn_into()?;
    overlay.set_class_name("loading");
    overlay.set_inner_html(r#"<div class="loading-spinner"></div>"#);
    body.append_child(&overlay)?;

    if document.ready_state() == "complete" {
        advance_loading(window.clone(), overlay, LoadingPhase::Visible);
        return Ok(None);
    }

    let win = window.clone();
    let listener = Listener::new(window, "load", move |_| {
        advance_loading(win.clone(), overlay.clone(), LoadingPhase::Visible);
    })?;
    Ok(Some(listener))
}

/// Footer copyright year
pub fn set_current_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("current-year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
