//! Page bootstrap
//!
//! Looks up each effect's drawing surface once, builds the effects with the
//! typed surfaces, and keeps them. A missing surface only disables its own
//! effect.

use rand::Rng;
use tracing::{info, warn};

use super::config::FxConfig;
use super::error::SurfaceError;
use super::frame::ParticleLoop;
use super::particles::ParticleField;
use super::radar::RadarChart;
use super::surface::{pixel_extent, DrawingSurface};

/// Element id of the full-viewport particle canvas
pub const PARTICLES_ID: &str = "particles";
/// Element id of the fixed-size skills chart canvas
pub const SKILLS_CHART_ID: &str = "skillsChart";

/// The environment the effects run in: surfaces by id and the viewport size
pub trait Host {
    type Surface: DrawingSurface;

    fn surface(&self, id: &str) -> Result<Self::Surface, SurfaceError>;

    /// Current viewport (width, height) in CSS pixels
    fn viewport(&self) -> (f64, f64);
}

/// Radar chart and the surface it was drawn on
pub struct RadarView<S: DrawingSurface> {
    pub chart: RadarChart,
    pub surface: S,
}

impl<S: DrawingSurface> RadarView<S> {
    pub fn redraw(&mut self) {
        self.chart.draw(&mut self.surface);
    }
}

/// All canvas effects on the page. Absent effects are `None`.
pub struct Page<S: DrawingSurface> {
    pub particles: Option<ParticleLoop<S>>,
    pub radar: Option<RadarView<S>>,
}

impl<S: DrawingSurface> Page<S> {
    /// Bind every effect whose surface exists. Never fails.
    ///
    /// The particle loop is built but not scheduled; the host drives
    /// [`ParticleLoop::tick`] from its own frame callback.
    pub fn bootstrap<H, R>(host: &H, config: &FxConfig, rng: &mut R) -> Self
    where
        H: Host<Surface = S>,
        R: Rng,
    {
        let particles = skip_missing(init_particles(host, config, rng));
        let radar = skip_missing(init_radar(host, config));

        info!(
            particles = particles.is_some(),
            radar = radar.is_some(),
            "Page effects initialized"
        );

        Self { particles, radar }
    }

    /// Viewport changed
    pub fn resize(&mut self, width: f64, height: f64) {
        if let Some(particles) = &mut self.particles {
            particles.resize(width, height);
        }
    }

    /// Stop the particle loop
    pub fn shutdown(&self) {
        if let Some(particles) = &self.particles {
            particles.handle().cancel();
        }
    }
}

fn init_particles<H: Host, R: Rng>(
    host: &H,
    config: &FxConfig,
    rng: &mut R,
) -> Result<ParticleLoop<H::Surface>, SurfaceError> {
    let mut surface = host.surface(PARTICLES_ID)?;
    let (width, height) = host.viewport();
    let (width, height) = (pixel_extent(width), pixel_extent(height));
    surface.set_size(width, height);

    let field = ParticleField::new(&config.particles, width, height, rng);
    Ok(ParticleLoop::new(field, surface))
}

fn init_radar<H: Host>(host: &H, config: &FxConfig) -> Result<RadarView<H::Surface>, SurfaceError> {
    let mut surface = host.surface(SKILLS_CHART_ID)?;
    let chart = RadarChart::for_surface(&config.radar, &surface);
    chart.draw(&mut surface);
    Ok(RadarView { chart, surface })
}

fn skip_missing<T>(result: Result<T, SurfaceError>) -> Option<T> {
    result
        .map_err(|e| {
            warn!(id = e.id(), error = %e, "Effect disabled");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCommand, RecordingSurface};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// In-memory host: a set of canvases with fixed sizes
    struct MemoryHost {
        canvases: HashMap<&'static str, (f64, f64)>,
        viewport: (f64, f64),
    }

    impl MemoryHost {
        fn new(ids: &[&'static str]) -> Self {
            Self {
                canvases: ids.iter().map(|&id| (id, (300.0, 300.0))).collect(),
                viewport: (1280.0, 720.0),
            }
        }
    }

    impl Host for MemoryHost {
        type Surface = RecordingSurface;

        fn surface(&self, id: &str) -> Result<RecordingSurface, SurfaceError> {
            self.canvases
                .get(id)
                .map(|&(w, h)| RecordingSurface::new(w, h))
                .ok_or_else(|| SurfaceError::missing(id))
        }

        fn viewport(&self) -> (f64, f64) {
            self.viewport
        }
    }

    fn bootstrap(host: &MemoryHost) -> Page<RecordingSurface> {
        let mut rng = SmallRng::seed_from_u64(11);
        Page::bootstrap(host, &FxConfig::default(), &mut rng)
    }

    #[test]
    fn test_bootstrap_all_effects() {
        let host = MemoryHost::new(&[PARTICLES_ID, SKILLS_CHART_ID]);
        let mut page = bootstrap(&host);

        let particles = page.particles.as_mut().unwrap();
        // Particle surface is sized to the viewport, not the element default
        assert_eq!(particles.surface().width(), 1280.0);
        assert_eq!(particles.surface().height(), 720.0);
        assert_eq!(particles.run_frames(5), 5);

        let radar = page.radar.as_ref().unwrap();
        assert_eq!(radar.surface.commands().len(), 11);
        assert_eq!(radar.chart.max_radius(), 120.0);
    }

    #[test]
    fn test_missing_particles_surface_keeps_radar() {
        let host = MemoryHost::new(&[SKILLS_CHART_ID]);
        let page = bootstrap(&host);

        assert!(page.particles.is_none());
        let radar = page.radar.as_ref().unwrap();
        assert_eq!(
            radar.surface.count(|c| matches!(c, DrawCommand::Polygon { .. })),
            1
        );
        // Nothing to cancel, nothing to panic
        page.shutdown();
    }

    #[test]
    fn test_missing_everything_is_a_noop() {
        let host = MemoryHost::new(&[]);
        let mut page = bootstrap(&host);
        assert!(page.particles.is_none());
        assert!(page.radar.is_none());
        page.resize(10.0, 10.0);
        page.shutdown();
    }

    #[test]
    fn test_resize_and_shutdown() {
        let host = MemoryHost::new(&[PARTICLES_ID]);
        let mut page = bootstrap(&host);
        assert!(page.radar.is_none());

        page.resize(800.0, 600.0);
        let particles = page.particles.as_mut().unwrap();
        assert_eq!(particles.field().size(), (800.0, 600.0));
        assert_eq!(particles.field().len(), 100);

        page.shutdown();
        let particles = page.particles.as_mut().unwrap();
        assert!(!particles.tick());
    }

    #[test]
    fn test_radar_redraw_does_not_accumulate() {
        let host = MemoryHost::new(&[SKILLS_CHART_ID]);
        let mut page = bootstrap(&host);
        let radar = page.radar.as_mut().unwrap();
        radar.redraw();
        radar.redraw();
        assert_eq!(radar.surface.commands().len(), 11);
    }
}
