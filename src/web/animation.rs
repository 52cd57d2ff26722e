//! `requestAnimationFrame` driver for the particle loop
//!
//! Each frame runs one tick and re-requests the next frame, until the
//! loop's AnimationHandle is cancelled or this driver is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::canvas::CanvasSurface;
use crate::core::{AnimationHandle, ParticleLoop};

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Log loop stats every this many frames
const STATS_EVERY: u64 = 600;

pub struct RafLoop {
    window: Window,
    handle: AnimationHandle,
    /// Id of the outstanding frame request, if any
    pending: Rc<Cell<Option<i32>>>,
    closure: FrameClosure,
}

impl RafLoop {
    pub fn start(
        window: Window,
        frame_loop: Rc<RefCell<ParticleLoop<CanvasSurface>>>,
    ) -> Result<Self, JsValue> {
        let handle = frame_loop.borrow().handle();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: FrameClosure = Rc::new(RefCell::new(None));

        let closure_inner = closure.clone();
        let pending_inner = pending.clone();
        let window_inner = window.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_inner.set(None);

            let mut frame_loop = frame_loop.borrow_mut();
            if !frame_loop.tick() {
                debug!("Frame loop stopped");
                // Drop our own closure: breaks the Rc cycle
                let _ = closure_inner.borrow_mut().take();
                return;
            }
            if frame_loop.field().frame_count() % STATS_EVERY == 0 {
                frame_loop.log_stats();
            }
            drop(frame_loop);

            if let Some(cb) = closure_inner.borrow().as_ref() {
                match window_inner.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(e) => warn!(?e, "requestAnimationFrame failed"),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match closure.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("frame closure missing")),
        };
        pending.set(Some(id));
        info!("Particle animation started");

        Ok(Self {
            window,
            handle,
            pending,
            closure,
        })
    }

    /// Stop rescheduling and withdraw the outstanding frame request
    pub fn stop(&self) {
        self.handle.cancel();
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                warn!(?e, "cancelAnimationFrame failed");
            }
        }
        let _ = self.closure.borrow_mut().take();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
