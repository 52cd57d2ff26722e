//! Browser document as an effect host

use web_sys::{Document, Window};

use super::canvas::CanvasSurface;
use crate::core::{Host, SurfaceError};

pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for DomHost {
    type Surface = CanvasSurface;

    fn surface(&self, id: &str) -> Result<CanvasSurface, SurfaceError> {
        CanvasSurface::from_document(&self.document, id)
    }

    fn viewport(&self) -> (f64, f64) {
        viewport(&self.window)
    }
}

/// `innerWidth` x `innerHeight`, 0 when unavailable
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
