//! Effect configuration
//!
//! Every field has a default, so `{}` is a valid document and partial
//! documents only override what they name.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::ConfigError;
use super::radar::{default_skills, SkillEntry};

/// Particle field tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles, fixed for the field's lifetime
    pub count: usize,
    /// Per-axis velocity bound in pixels/frame; velocities fall in [-max_speed, max_speed)
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            opacity_min: 0.2,
            opacity_max: 0.7,
        }
    }
}

/// Radar chart tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Outer plot radius in pixels, independent of surface size
    pub max_radius: f64,
    /// Number of concentric grid circles
    pub rings: u32,
    /// Erase the surface before every full redraw
    pub clear_before_draw: bool,
    pub skills: Vec<SkillEntry>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_radius: 120.0,
            rings: 5,
            clear_before_draw: true,
            skills: default_skills(),
        }
    }
}

/// Viewport used when no browser window is available (headless runs)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub particles: ParticleConfig,
    pub radar: RadarConfig,
    pub viewport: Viewport,
    /// Target frames per second for hosts that schedule frames themselves
    pub frame_rate: f64,
}

/// Highest accepted frame rate; keeps the frame period well above zero
pub const MAX_FRAME_RATE: f64 = 1000.0;

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            radar: RadarConfig::default(),
            viewport: Viewport::default(),
            frame_rate: 60.0,
        }
    }
}

impl FxConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FxConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            particles = config.particles.count,
            skills = config.radar.skills.len(),
            frame_rate = config.frame_rate,
            "Config loaded"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if p.count == 0 {
            return Err(ConfigError::Invalid("particles.count must be > 0".into()));
        }
        if !(p.max_speed.is_finite() && p.max_speed >= 0.0) {
            return Err(ConfigError::Invalid("particles.max_speed must be finite and >= 0".into()));
        }
        check_range("particles.radius", p.radius_min, p.radius_max)?;
        if p.radius_min <= 0.0 {
            return Err(ConfigError::Invalid("particles.radius_min must be > 0".into()));
        }
        check_range("particles.opacity", p.opacity_min, p.opacity_max)?;
        if p.opacity_min < 0.0 || p.opacity_max > 1.0 {
            return Err(ConfigError::Invalid("particles.opacity must lie in [0, 1]".into()));
        }

        if !(self.radar.max_radius.is_finite() && self.radar.max_radius > 0.0) {
            return Err(ConfigError::Invalid("radar.max_radius must be finite and > 0".into()));
        }
        if self.radar.rings == 0 {
            return Err(ConfigError::Invalid("radar.rings must be > 0".into()));
        }
        if !(self.frame_rate > 0.0 && self.frame_rate <= MAX_FRAME_RATE) {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must lie in (0, {MAX_FRAME_RATE}]"
            )));
        }
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::Invalid(
                "viewport must be finite and not negative".into(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ConfigError::Invalid(format!("{name}: min {min} exceeds max {max}")));
    }
    Ok(())
}
