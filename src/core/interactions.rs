//! Page interaction state
//!
//! Browser-free logic behind the navigation bar, in-page scrolling, the
//! project filter, the contact form, scroll reveals and the loading overlay.
//! The DOM wiring only reads these and applies classes and styles.

use tracing::debug;

use crate::theme::{colors, Rgba};

/// Scroll offset past which the navigation bar turns opaque
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
/// Backdrop blur applied to the navigation bar in every state
pub const NAV_BLUR: &str = "blur(20px)";

/// Navigation bar background for a given vertical scroll offset
pub fn nav_background(scroll_y: f64) -> Rgba {
    if scroll_y > NAV_SCROLL_THRESHOLD {
        colors::NAV_SCROLLED
    } else {
        colors::NAV_TOP
    }
}

/// Mobile menu open/closed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Hamburger button clicked
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any navigation link clicked
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Selector of the element a navigation link scrolls to.
/// Only in-page fragments (`#id`) qualify; other links navigate normally.
pub fn scroll_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Some(href),
        _ => None,
    }
}

/// Filter value that shows every project
pub const FILTER_ALL: &str = "all";

/// Which project category is currently shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    active: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn select(&mut self, filter: &str) {
        debug!(filter, "Project filter selected");
        self.active = filter.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether a card of `category` is visible under the active filter
    pub fn shows(&self, category: &str) -> bool {
        self.active == FILTER_ALL || self.active == category
    }

    /// Whether the button carrying `filter` is the highlighted one
    pub fn is_active_button(&self, filter: &str) -> bool {
        self.active == filter
    }
}

/// How long a result label stays on the submit button
pub const SUBMIT_RESET_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Sending => "Sending...",
            SubmitState::Sent => "Message Sent!",
            SubmitState::Failed => "Failed to Send",
        }
    }

    /// Only Idle accepts a submission
    pub fn disabled(&self) -> bool {
        *self != SubmitState::Idle
    }

    /// Button background override; None keeps the stylesheet default
    pub fn background(&self) -> Option<&'static str> {
        match self {
            SubmitState::Sent => Some("linear-gradient(135deg, #00ff88, #00d4ff)"),
            SubmitState::Failed => Some("linear-gradient(135deg, #ff0080, #ff6b6b)"),
            _ => None,
        }
    }
}

/// Contact-form submit button lifecycle: Idle → Sending → Sent | Failed → Idle
#[derive(Clone, Debug)]
pub struct SubmitButton {
    state: SubmitState,
    /// Label the button had before the first submission
    original_label: String,
}

impl SubmitButton {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            state: SubmitState::Idle,
            original_label: original_label.into(),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn label(&self) -> &str {
        match self.state {
            SubmitState::Idle => self.original_label.as_str(),
            other => other.label(),
        }
    }

    /// Submit pressed. Ignored unless idle.
    pub fn begin(&mut self) -> bool {
        if self.state != SubmitState::Idle {
            return false;
        }
        self.state = SubmitState::Sending;
        true
    }

    /// Submission handed off. Returns true if the caller should schedule a reset.
    pub fn finish(&mut self, ok: bool) -> bool {
        if self.state != SubmitState::Sending {
            return false;
        }
        self.state = if ok { SubmitState::Sent } else { SubmitState::Failed };
        debug!(state = ?self.state, "Form submission finished");
        true
    }

    /// Timer elapsed. Returns true if the form should be cleared too.
    pub fn reset(&mut self) -> bool {
        let clear_form = self.state == SubmitState::Sent;
        self.state = SubmitState::Idle;
        clear_form
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new(SubmitState::Idle.label())
    }
}

/// Class set on a form field's parent while it is focused or filled
pub const FOCUSED_CLASS: &str = "focused";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
}

/// Marker change for a form field's parent: Some(add), or None to leave it
pub fn focus_marker(event: FieldEvent, value: &str) -> Option<bool> {
    match event {
        FieldEvent::Focus => Some(true),
        FieldEvent::Blur if value.is_empty() => Some(false),
        FieldEvent::Blur => None,
    }
}

/// Fade-in of content blocks as they scroll into view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub selector: &'static str,
    /// Visible fraction that counts as "in view"
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Added once, never removed
    pub class: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".project-card, .skill-item, .timeline-item, .contact-item",
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            class: "animate-in",
        }
    }
}

/// Loading overlay: visible until the page loads, then fades, then leaves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Visible,
    /// `hidden` class set, fade transition running
    Fading,
    /// `display: none`
    Removed,
}

impl LoadingPhase {
    /// Delay before moving to the next phase, and that phase
    pub fn next(self) -> Option<(u32, LoadingPhase)> {
        match self {
            LoadingPhase::Visible => Some((LOADING_HIDE_DELAY_MS, LoadingPhase::Fading)),
            LoadingPhase::Fading => Some((LOADING_REMOVE_DELAY_MS, LoadingPhase::Removed)),
            LoadingPhase::Removed => None,
        }
    }
}

/// Time the overlay stays after the `load` event
pub const LOADING_HIDE_DELAY_MS: u32 = 1_000;
/// Fade duration before the overlay is taken out of layout
pub const LOADING_REMOVE_DELAY_MS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_background_threshold() {
        assert_eq!(nav_background(0.0), colors::NAV_TOP);
        assert_eq!(nav_background(100.0), colors::NAV_TOP);
        assert_eq!(nav_background(100.5), colors::NAV_SCROLLED);
    }

    #[test]
    fn test_nav_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_project_filter() {
        let mut filter = ProjectFilter::default();
        assert!(filter.shows("shopify"));
        assert!(filter.shows("web"));
        assert!(filter.is_active_button(FILTER_ALL));

        filter.select("shopify");
        assert!(filter.shows("shopify"));
        assert!(!filter.shows("web"));
        assert!(filter.is_active_button("shopify"));
        assert!(!filter.is_active_button(FILTER_ALL));
    }

    #[test]
    fn test_submit_success_cycle() {
        let mut button = SubmitButton::new("Send");
        assert_eq!(button.label(), "Send");
        assert!(!button.state().disabled());

        assert!(button.begin());
        assert_eq!(button.label(), "Sending...");
        assert!(button.state().disabled());
        // Double submit ignored
        assert!(!button.begin());

        assert!(button.finish(true));
        assert_eq!(button.label(), "Message Sent!");
        assert!(button.state().background().is_some());
        // Shown as disabled while submits are ignored
        assert!(button.state().disabled());
        assert!(!button.begin());

        assert!(button.reset());
        assert_eq!(button.state(), SubmitState::Idle);
        assert_eq!(button.label(), "Send");
    }

    #[test]
    fn test_submit_failure_cycle() {
        let mut button = SubmitButton::default();
        assert!(!button.finish(false));

        button.begin();
        assert!(button.finish(false));
        assert_eq!(button.label(), "Failed to Send");
        assert!(button.state().disabled());

        // Failed submissions keep the form contents
        assert!(!button.reset());
        assert_eq!(button.label(), "Send Message");
        assert_eq!(button.state().background(), None);
    }

    #[test]
    fn test_scroll_target_only_for_fragments() {
        assert_eq!(scroll_target("#about"), Some("#about"));
        assert_eq!(scroll_target("#"), None);
        assert_eq!(scroll_target("# x"), None);
        assert_eq!(scroll_target("resume.pdf"), None);
        assert_eq!(scroll_target("https://example.com/#top"), None);
    }

    #[test]
    fn test_focus_marker() {
        assert_eq!(focus_marker(FieldEvent::Focus, ""), Some(true));
        assert_eq!(focus_marker(FieldEvent::Focus, "hello"), Some(true));
        assert_eq!(focus_marker(FieldEvent::Blur, ""), Some(false));
        // Filled fields keep their label raised
        assert_eq!(focus_marker(FieldEvent::Blur, "hello"), None);
    }

    #[test]
    fn test_reveal_defaults() {
        let reveal = RevealOptions::default();
        assert_eq!(reveal.threshold, 0.1);
        assert_eq!(reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(reveal.class, "animate-in");
        assert_eq!(reveal.selector.split(", ").count(), 4);
    }

    #[test]
    fn test_loading_phases() {
        let mut phase = LoadingPhase::default();
        let mut total = 0;
        let mut seen = vec![phase];
        while let Some((delay, next)) = phase.next() {
            total += delay;
            phase = next;
            seen.push(phase);
        }
        assert_eq!(
            seen,
            [LoadingPhase::Visible, LoadingPhase::Fading, LoadingPhase::Removed]
        );
        assert_eq!(total, 1_500);
    }
}
