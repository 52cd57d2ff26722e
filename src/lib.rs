//! Portfolio page canvas effects
//!
//! - Particle field: drifting accent dots across the whole viewport
//! - Skills radar chart: static spider chart of a small percentage dataset
//!
//! The simulation and geometry live in `core` and have no browser
//! dependency. The `wasm` feature adds canvas/DOM bindings and a start hook;
//! the `cli` feature builds a headless runner.

pub mod core;
pub mod theme;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod web;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    web::start();
}
