//! Dark portfolio palette with a single cyan accent

use std::fmt;

/// Straight (non-premultiplied) RGBA color, alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha, clamped to [0, 1]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(r, g, b, a)` string accepted by canvas `fillStyle`/`strokeStyle`
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Page palette
pub mod colors {
    use super::Rgba;

    // === Accent ===
    pub const ACCENT: Rgba = Rgba::rgb(0, 212, 255);               // #00D4FF - primary accent

    // === Radar chart ===
    pub const GRID_RING: Rgba = Rgba::new(255, 255, 255, 0.2);     // concentric circles
    pub const GRID_SPOKE: Rgba = Rgba::new(255, 255, 255, 0.4);    // axis lines
    pub const POLYGON_FILL: Rgba = Rgba::new(0, 212, 255, 0.3);    // translucent accent
    pub const POLYGON_STROKE: Rgba = Rgba::new(0, 212, 255, 0.8);  // near-opaque accent

    // === Navigation bar ===
    pub const NAV_SCROLLED: Rgba = Rgba::new(10, 10, 10, 0.95);
    pub const NAV_TOP: Rgba = Rgba::new(10, 10, 10, 0.8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_formatting_matches_canvas_syntax() {
        assert_eq!(colors::ACCENT.with_alpha(0.5).css(), "rgba(0, 212, 255, 0.5)");
        assert_eq!(colors::GRID_RING.css(), "rgba(255, 255, 255, 0.2)");
        assert_eq!(colors::NAV_SCROLLED.css(), "rgba(10, 10, 10, 0.95)");
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(colors::ACCENT.with_alpha(3.0).a, 1.0);
        assert_eq!(colors::ACCENT.with_alpha(-1.0).a, 0.0);
    }
}
