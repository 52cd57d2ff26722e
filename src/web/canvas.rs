//! `<canvas>` backed drawing surface

use std::f64::consts::TAU;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::core::{pixel_extent, DrawingSurface, Point, SurfaceError};
use crate::theme::Rgba;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to the canvas element with the given id
    pub fn from_document(document: &Document, id: &str) -> Result<Self, SurfaceError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::missing(id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas { id: id.to_string() })?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::NoContext { id: id.to_string() })?;

        Ok(Self { canvas, ctx })
    }

    fn arc(&self, center: Point, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU) {
            warn!(?e, "Canvas arc failed");
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(pixel_extent(width) as u32);
        self.canvas.set_height(pixel_extent(height) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.arc(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64) {
        self.arc(center, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn fill_stroke_polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba, line_width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();

        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.set_stroke_style_str(&stroke.css());
        self.ctx.set_line_width(line_width);
        self.ctx.fill();
        self.ctx.stroke();
    }
}
