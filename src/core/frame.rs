//! Frame loop plumbing
//!
//! - AnimationHandle: shared cancellation flag for a self-rescheduling loop
//! - FpsCounter: rolling frames-per-second estimate
//! - ParticleLoop: particle field + its surface, advanced once per host frame

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info};

use super::particles::ParticleField;
use super::surface::{pixel_extent, DrawingSurface};
use crate::time::now_seconds;

/// Cancellation handle for a frame loop.
///
/// Clones share one flag. The loop checks it before every frame and stops
/// rescheduling itself once it is set.
#[derive(Clone, Debug, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            debug!("Animation cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Rolling FPS over the last 60 frames
#[derive(Debug)]
pub struct FpsCounter {
    /// Frame timestamps in seconds
    frames: VecDeque<f64>,
}

impl FpsCounter {
    const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(Self::WINDOW + 1),
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(now_seconds());
    }

    /// Record a frame at an explicit timestamp (seconds)
    pub fn tick_at(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > Self::WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// A particle field bound to the surface it draws on.
///
/// Hosts call [`ParticleLoop::tick`] once per display frame and reschedule
/// only while it returns `true`.
pub struct ParticleLoop<S: DrawingSurface> {
    field: ParticleField,
    surface: S,
    handle: AnimationHandle,
    fps: FpsCounter,
}

impl<S: DrawingSurface> ParticleLoop<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self {
            field,
            surface,
            handle: AnimationHandle::new(),
            fps: FpsCounter::new(),
        }
    }

    /// Handle that stops this loop; clone it out before handing the loop to a scheduler
    pub fn handle(&self) -> AnimationHandle {
        self.handle.clone()
    }

    /// Run one frame. Returns false (and draws nothing) once cancelled.
    pub fn tick(&mut self) -> bool {
        if self.handle.is_cancelled() {
            return false;
        }
        self.field.frame(&mut self.surface);
        self.fps.tick();
        true
    }

    /// Viewport changed: resize the surface, keep the particles.
    /// Both get the same whole-pixel size.
    pub fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = (pixel_extent(width), pixel_extent(height));
        self.surface.set_size(width, height);
        self.field.resize(width, height);
    }

    /// Drive up to `max_frames` frames synchronously, stopping early on cancel.
    /// Returns the number of frames run.
    pub fn run_frames(&mut self, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames && self.tick() {
            ran += 1;
        }
        ran
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    /// Log a one-line summary of the loop state
    pub fn log_stats(&self) {
        info!(
            frames = self.field.frame_count(),
            particles = self.field.len(),
            fps = format!("{:.1}", self.fps()),
            cancelled = self.handle.is_cancelled(),
            "particle loop"
        );
    }
}
