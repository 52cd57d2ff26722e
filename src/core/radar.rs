//! Skills radar (spider) chart
//!
//! One axis per skill, evenly spaced, first axis pointing straight up.
//! Static: computed once from the dataset and drawn on demand.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::{debug, warn};

use super::config::RadarConfig;
use super::surface::{DrawingSurface, Point};
use crate::theme::colors;

/// A labelled percentage score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Percentage, expected in [0, 100]; clamped when plotted
    pub value: f64,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Value as a fraction of the full radius, in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.value.is_nan() {
            return 0.0;
        }
        self.value.clamp(0.0, 100.0) / 100.0
    }
}

/// Dataset shown on the portfolio page
pub fn default_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("Shopify & Liquid", 95.0),
        SkillEntry::new("HTML5 & CSS3", 92.0),
        SkillEntry::new("JavaScript (ES6+)", 90.0),
        SkillEntry::new("Bootstrap & Tailwind", 88.0),
        SkillEntry::new("Git & VS Code", 85.0),
    ]
}

const RING_LINE_WIDTH: f64 = 1.0;
const SPOKE_LINE_WIDTH: f64 = 1.0;
const POLYGON_LINE_WIDTH: f64 = 2.0;

#[derive(Clone, Debug)]
pub struct RadarChart {
    skills: Vec<SkillEntry>,
    center: Point,
    max_radius: f64,
    rings: u32,
    clear_before_draw: bool,
}

impl RadarChart {
    /// Lay the chart out on a `width` x `height` surface, centered
    pub fn new(config: &RadarConfig, width: f64, height: f64) -> Self {
        let out_of_range = config
            .skills
            .iter()
            .filter(|s| !(0.0..=100.0).contains(&s.value))
            .count();
        if out_of_range > 0 {
            warn!(out_of_range, "Skill values outside [0, 100] will be clamped");
        }

        let chart = Self {
            skills: config.skills.clone(),
            center: Point::new(width / 2.0, height / 2.0),
            max_radius: config.max_radius,
            rings: config.rings,
            clear_before_draw: config.clear_before_draw,
        };
        debug!(
            skills = chart.skills.len(),
            cx = chart.center.x,
            cy = chart.center.y,
            max_radius = chart.max_radius,
            "Radar chart laid out"
        );
        chart
    }

    /// Lay the chart out to fit an existing surface
    pub fn for_surface<S: DrawingSurface + ?Sized>(config: &RadarConfig, surface: &S) -> Self {
        Self::new(config, surface.width(), surface.height())
    }

    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Angle of axis `i` in radians: `i / N` of a turn, starting at -90° (up)
    pub fn angle(&self, i: usize) -> f64 {
        let n = self.skills.len().max(1) as f64;
        (i as f64 / n) * TAU - FRAC_PI_2
    }

    /// Outer end of axis `i`
    pub fn spoke_end(&self, i: usize) -> Point {
        self.center.polar_offset(self.angle(i), self.max_radius)
    }

    /// Polygon vertex for skill `i`, or None past the end of the dataset
    pub fn vertex(&self, i: usize) -> Option<Point> {
        let skill = self.skills.get(i)?;
        Some(
            self.center
                .polar_offset(self.angle(i), self.max_radius * skill.fraction()),
        )
    }

    /// All polygon vertices in dataset order
    pub fn vertices(&self) -> Vec<Point> {
        (0..self.skills.len()).filter_map(|i| self.vertex(i)).collect()
    }

    /// Radii of the concentric grid circles, innermost first
    pub fn grid_radii(&self) -> Vec<f64> {
        let rings = self.rings.max(1) as f64;
        (1..=self.rings)
            .map(|k| self.max_radius / rings * k as f64)
            .collect()
    }

    /// Concentric circles plus one spoke per skill
    pub fn draw_grid<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for radius in self.grid_radii() {
            surface.stroke_circle(self.center, radius, colors::GRID_RING, RING_LINE_WIDTH);
        }

        for i in 0..self.skills.len() {
            surface.stroke_line(self.center, self.spoke_end(i), colors::GRID_SPOKE, SPOKE_LINE_WIDTH);
        }
    }

    /// Filled, outlined skill polygon. Nothing is drawn for an empty dataset.
    pub fn draw_polygon<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return;
        }
        surface.fill_stroke_polygon(
            &vertices,
            colors::POLYGON_FILL,
            colors::POLYGON_STROKE,
            POLYGON_LINE_WIDTH,
        );
    }

    /// Full redraw: optional clear, grid, polygon
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        if self.clear_before_draw {
            surface.clear();
        }
        self.draw_grid(surface);
        self.draw_polygon(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCommand, RecordingSurface};

    const EPS: f64 = 1e-9;

    fn assert_point(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    fn chart_with(skills: Vec<SkillEntry>) -> RadarChart {
        let config = RadarConfig {
            skills,
            ..Default::default()
        };
        RadarChart::new(&config, 300.0, 300.0)
    }

    #[test]
    fn test_default_vertex_placement() {
        let chart = chart_with(default_skills());
        assert_eq!(chart.center(), Point::new(150.0, 150.0));

        // Vertex 0: straight up, 120 * 0.95 = 114
        assert!((chart.angle(0) - (-FRAC_PI_2)).abs() < EPS);
        assert_point(chart.vertex(0).unwrap(), 150.0, 150.0 - 114.0);

        // Vertex 1: -90° + 72° = -18°, 120 * 0.92 = 110.4
        let theta = (-18.0f64).to_radians();
        assert!((chart.angle(1) - theta).abs() < EPS);
        assert_point(
            chart.vertex(1).unwrap(),
            150.0 + 110.4 * theta.cos(),
            150.0 + 110.4 * theta.sin(),
        );

        assert_eq!(chart.vertices().len(), 5);
        assert!(chart.vertex(5).is_none());
    }

    #[test]
    fn test_values_are_clamped() {
        let chart = chart_with(vec![
            SkillEntry::new("over", 150.0),
            SkillEntry::new("under", -20.0),
            SkillEntry::new("nan", f64::NAN),
        ]);
        // Over-range reaches the outer ring exactly
        assert_point(chart.vertex(0).unwrap(), 150.0, 30.0);
        // Under-range and NaN collapse onto the center
        assert_point(chart.vertex(1).unwrap(), 150.0, 150.0);
        assert_point(chart.vertex(2).unwrap(), 150.0, 150.0);
    }

    #[test]
    fn test_grid_rings_and_spokes() {
        let chart = chart_with(default_skills());
        assert_eq!(chart.grid_radii(), vec![24.0, 48.0, 72.0, 96.0, 120.0]);

        let mut surface = RecordingSurface::new(300.0, 300.0);
        chart.draw_grid(&mut surface);

        let circles = surface.count(|c| matches!(c, DrawCommand::StrokeCircle { .. }));
        let spokes = surface.count(|c| matches!(c, DrawCommand::Line { .. }));
        assert_eq!(circles, 5);
        assert_eq!(spokes, 5);

        match &surface.commands()[5] {
            DrawCommand::Line { from, to, color, .. } => {
                assert_eq!(*from, chart.center());
                assert_point(*to, 150.0, 30.0);
                assert_eq!(*color, colors::GRID_SPOKE);
            }
            other => panic!("expected first spoke, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dataset_draws_only_rings() {
        let chart = chart_with(Vec::new());
        let mut surface = RecordingSurface::new(300.0, 300.0);
        chart.draw(&mut surface);

        assert_eq!(surface.commands().len(), 5);
        assert!(surface
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::StrokeCircle { .. })));
        assert!(chart.vertices().is_empty());
    }

    #[test]
    fn test_polygon_styles() {
        let chart = chart_with(default_skills());
        let mut surface = RecordingSurface::new(300.0, 300.0);
        chart.draw_polygon(&mut surface);

        match surface.commands() {
            [DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
            }] => {
                assert_eq!(points, &chart.vertices());
                assert_eq!(*fill, colors::POLYGON_FILL);
                assert_eq!(*stroke, colors::POLYGON_STROKE);
                assert_eq!(*line_width, 2.0);
            }
            other => panic!("expected one polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_is_deterministic() {
        let chart = chart_with(default_skills());
        let mut surface = RecordingSurface::new(300.0, 300.0);

        chart.draw_grid(&mut surface);
        let first = surface.commands().to_vec();

        surface.clear();
        chart.draw_grid(&mut surface);
        assert_eq!(surface.commands(), first.as_slice());
    }

    #[test]
    fn test_redraw_clears_by_default() {
        let chart = chart_with(default_skills());
        let mut surface = RecordingSurface::new(300.0, 300.0);
        chart.draw(&mut surface);
        let once = surface.commands().len();
        chart.draw(&mut surface);
        assert_eq!(surface.commands().len(), once);
        assert_eq!(once, 5 + 5 + 1);
    }

    #[test]
    fn test_redraw_accumulates_without_clear() {
        let config = RadarConfig {
            clear_before_draw: false,
            ..Default::default()
        };
        let chart = RadarChart::new(&config, 300.0, 300.0);
        let mut surface = RecordingSurface::new(300.0, 300.0);
        chart.draw(&mut surface);
        chart.draw(&mut surface);
        assert_eq!(surface.commands().len(), 2 * 11);
        assert_eq!(surface.clear_count(), 0);
    }

    #[test]
    fn test_chart_fits_surface_center() {
        let surface = RecordingSurface::new(400.0, 260.0);
        let chart = RadarChart::for_surface(&RadarConfig::default(), &surface);
        assert_eq!(chart.center(), Point::new(200.0, 130.0));
        assert_eq!(chart.max_radius(), 120.0);
    }
}
