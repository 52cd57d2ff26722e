//! Full-viewport particle field
//!
//! A fixed set of slow-drifting dots. Each frame moves every particle by its
//! velocity, wraps it back onto the surface, and redraws all of them.

use rand::Rng;
use tracing::{debug, trace};

use super::config::ParticleConfig;
use super::surface::{DrawingSurface, Point};
use crate::theme::colors;

/// A single dot. Velocity, radius and opacity never change after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Random particle somewhere on a `width` x `height` surface
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &ParticleConfig,
    ) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            vx: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
            vy: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
            radius: lerp(config.radius_min, config.radius_max, rng.gen::<f64>()),
            opacity: lerp(config.opacity_min, config.opacity_max, rng.gen::<f64>()),
        }
    }

    /// Advance one frame and wrap into `[0, width) x [0, height)`
    #[inline]
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Wrap a coordinate into `[0, extent)`.
///
/// A particle leaving one edge re-enters at the opposite edge carrying its
/// overshoot, so `extent - 0.1 + 1.0` lands on `0.9`. A degenerate extent
/// pins the axis to 0.
#[inline]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[inline]
fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

/// Owns the particle collection and the surface bounds it wraps into
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    /// Frames stepped since creation
    frame: u64,
}

impl ParticleField {
    /// Generate `config.count` random particles across the surface
    pub fn new<R: Rng>(
        config: &ParticleConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let particles: Vec<Particle> = (0..config.count)
            .map(|_| Particle::random(rng, width, height, config))
            .collect();

        debug!(count = particles.len(), width, height, "Particle field created");

        Self::with_particles(width, height, particles)
    }

    /// Build a field from explicit particles
    pub fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            width,
            height,
            frame: 0,
        }
    }

    /// Adopt new surface bounds. Particles are kept where they are; any that
    /// now lie outside wrap back in on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(
            old_width = self.width,
            old_height = self.height,
            width,
            height,
            "Particle field resized"
        );
        self.width = width;
        self.height = height;
    }

    /// Move every particle one frame
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
        self.frame += 1;
        trace!(frame = self.frame, "Particle step");
    }

    /// Draw all particles as accent-colored discs at their own opacity
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.position(), p.radius, colors::ACCENT.with_alpha(p.opacity));
        }
    }

    /// One complete frame: step, clear, render
    pub fn frame<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        surface.clear();
        self.render(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCommand, RecordingSurface};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 2.0,
            opacity: 0.5,
        }
    }

    fn in_bounds(field: &ParticleField) -> bool {
        let (w, h) = field.size();
        field
            .particles()
            .iter()
            .all(|p| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h)
    }

    #[test]
    fn test_wrap_overflow_carries_overshoot() {
        let width = 800.0;
        let mut field =
            ParticleField::with_particles(width, 600.0, vec![particle(width - 0.1, 10.0, 1.0, 0.0)]);
        field.step();

        let p = field.particles()[0];
        assert!((p.x - 0.9).abs() < 1e-9, "x = {}", p.x);
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn test_wrap_underflow_each_axis_independent() {
        let mut field =
            ParticleField::with_particles(100.0, 50.0, vec![particle(5.0, 0.1, 0.0, -0.25)]);
        field.step();

        let p = field.particles()[0];
        assert_eq!(p.x, 5.0);
        assert!((p.y - 49.85).abs() < 1e-9, "y = {}", p.y);
    }

    #[test]
    fn test_wrap_degenerate_extent() {
        assert_eq!(wrap(12.0, 0.0), 0.0);
        assert_eq!(wrap(-3.0, 0.0), 0.0);
        assert_eq!(wrap(f64::NAN, 10.0), 0.0);
        assert!(wrap(-1e-18, 10.0) < 10.0);
    }

    #[test]
    fn test_generated_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = ParticleConfig::default();
        let field = ParticleField::new(&config, 1024.0, 768.0, &mut rng);

        assert_eq!(field.len(), 100);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((1.0..=3.0).contains(&p.radius));
            assert!((0.2..=0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_invariants_hold_over_many_frames() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = ParticleConfig::default();
        let mut field = ParticleField::new(&config, 320.0, 240.0, &mut rng);
        let initial = field.particles().to_vec();

        for _ in 0..5_000 {
            field.step();
            assert!(in_bounds(&field));
        }

        assert_eq!(field.len(), 100);
        assert_eq!(field.frame_count(), 5_000);
        // Per-particle constants are untouched
        for (before, after) in initial.iter().zip(field.particles()) {
            assert_eq!(before.vx, after.vx);
            assert_eq!(before.vy, after.vy);
            assert_eq!(before.radius, after.radius);
            assert_eq!(before.opacity, after.opacity);
        }
    }

    #[test]
    fn test_resize_preserves_particles() {
        let mut field = ParticleField::with_particles(
            1000.0,
            800.0,
            vec![particle(900.0, 700.0, 0.0, 0.0), particle(10.0, 10.0, 0.0, 0.0)],
        );

        field.resize(500.0, 400.0);
        assert_eq!(field.len(), 2);
        // Positions untouched until the next step
        assert_eq!(field.particles()[0].x, 900.0);
        assert_eq!(field.particles()[1].x, 10.0);

        field.step();
        assert!(in_bounds(&field));
        assert_eq!(field.particles()[1].position(), Point::new(10.0, 10.0));

        field.resize(2000.0, 1600.0);
        field.step();
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_frame_clears_and_draws_every_particle() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = ParticleConfig {
            count: 12,
            ..Default::default()
        };
        let mut field = ParticleField::new(&config, 200.0, 200.0, &mut rng);
        let mut surface = RecordingSurface::new(200.0, 200.0);

        field.frame(&mut surface);
        field.frame(&mut surface);

        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.commands().len(), 12);
        for (cmd, p) in surface.commands().iter().zip(field.particles()) {
            match cmd {
                DrawCommand::FillCircle { center, radius, color } => {
                    assert_eq!(*center, p.position());
                    assert_eq!(*radius, p.radius);
                    assert_eq!((color.r, color.g, color.b), (0, 212, 255));
                    assert_eq!(color.a, p.opacity);
                }
                other => panic!("unexpected command {other:?}"),
            }
        }
    }
}
