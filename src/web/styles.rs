//! Stylesheet injection

use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Mobile navigation drawer, driven by the `active` class on menu and toggle
pub const NAV_STYLES_ID: &str = "fx-nav-styles";
pub const NAV_STYLES: &str = r#"
@media (max-width: 768px) {
    .nav-menu {
        position: fixed;
        top: 100%;
        left: 0;
        right: 0;
        width: 100vw;
        max-width: 100vw;
        background: rgba(10, 10, 10, 0.95);
        backdrop-filter: blur(20px);
        padding: 2rem 1rem;
        flex-direction: column;
        gap: 1rem;
        transform: translateY(-100%);
        opacity: 0;
        transition: all 0.3s ease;
        box-sizing: border-box;
        overflow-x: hidden;
    }
    .nav-menu.active { transform: translateY(0); opacity: 1; }
    .nav-menu a { width: 100%; text-align: center; padding: 1rem; border-radius: 8px; }
    .nav-menu a:hover { background: rgba(0, 212, 255, 0.1); }
    .nav-toggle.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 5px); }
    .nav-toggle.active span:nth-child(2) { opacity: 0; }
    .nav-toggle.active span:nth-child(3) { transform: rotate(-45deg) translate(7px, -6px); }
}
@media (max-width: 480px) {
    .nav-menu { padding: 1.5rem 0.75rem; }
    .nav-menu a { padding: 0.875rem; font-size: 0.875rem; }
}
"#;

/// Fade-in keyframes for elements marked by the reveal observer
pub const REVEAL_STYLES_ID: &str = "fx-reveal-styles";
pub const REVEAL_STYLES: &str = r#"
.animate-in {
    animation: fadeInUp 0.6s ease forwards;
}
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;

/// Append a `<style id=..>` to `<head>` unless one with that id exists.
/// Returns whether a new element was added.
pub fn ensure_style(document: &Document, id: &str, css: &str) -> Result<bool, JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }
    let Some(head) = document.head() else {
        return Ok(false);
    };

    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    debug!(id, "Stylesheet injected");
    Ok(true)
}
