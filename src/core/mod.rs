//! Platform-agnostic core - shared between the WASM page and the CLI

pub mod config;
pub mod error;
pub mod frame;
pub mod interactions;
pub mod page;
pub mod particles;
pub mod radar;
pub mod surface;
pub mod svg;

pub use config::{FxConfig, ParticleConfig, RadarConfig, Viewport, MAX_FRAME_RATE};
pub use error::{ConfigError, SurfaceError};
pub use frame::{AnimationHandle, FpsCounter, ParticleLoop};
pub use page::{Host, Page, RadarView, PARTICLES_ID, SKILLS_CHART_ID};
pub use particles::{Particle, ParticleField};
pub use radar::{default_skills, RadarChart, SkillEntry};
pub use surface::{pixel_extent, DrawCommand, DrawingSurface, Point, RecordingSurface};
