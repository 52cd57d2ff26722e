//! Drawing surface abstraction
//!
//! - DrawingSurface: the subset of a 2D canvas context the effects need
//! - RecordingSurface: in-memory display list (tests, headless CLI)

use crate::theme::Rgba;

/// A point in surface pixel coordinates (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` in direction `angle` (radians, clockwise from +x)
    pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}

/// Whole-pixel size of a canvas backing store for a requested extent.
/// Negative or non-finite extents give 0.
pub fn pixel_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.round()
    } else {
        0.0
    }
}

/// Immediate-mode 2D drawing target, sized in pixels.
///
/// Mirrors the handful of canvas operations used by the effects so the
/// simulation and geometry never touch a browser API directly.
pub trait DrawingSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Resize the backing store. Like a canvas, this discards current contents.
    fn set_size(&mut self, width: f64, height: f64);

    /// Erase the whole surface to transparent
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64);

    /// Fill and outline a closed polygon. Fewer than two points draws nothing.
    fn fill_stroke_polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba, line_width: f64);

    /// Surface midpoint
    fn center(&self) -> Point {
        Point::new(self.width() / 2.0, self.height() / 2.0)
    }
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgba,
        line_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        line_width: f64,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgba,
        stroke: Rgba,
        line_width: f64,
    },
}

/// Display-list surface. `clear()` drops everything recorded so far, so the
/// command list always describes what is currently "on screen".
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
    /// Number of `clear()` calls since creation
    clears: u64,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Commands drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Count of commands matching a predicate
    pub fn count(&self, f: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| f(c)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_stroke_polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba, line_width: f64) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
            line_width,
        });
    }
}
