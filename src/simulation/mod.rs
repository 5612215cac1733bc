//! Intro - scatter, collide, settle
//!
//! IntroCore owns every particle for the lifetime of the intro and is
//! advanced one frame at a time by the host. It never touches the DOM: the
//! browser adapter reads `visual_states()` after each frame and pushes them
//! to the elements.
//!
//! - init/    - particle spawning around the viewport edges
//! - step/    - per-frame phase dispatch and phase-entry hooks
//! - render/  - particle -> visual state (left/top/rotation/scale/opacity)
//! - perf/    - optional per-frame stats

use crate::core::random::Rng;
use crate::core::Vec2;
use crate::domain::config::IntroConfig;
use crate::domain::particle::{IconSlot, Particle};
use crate::domain::phase::{Phase, PhaseWindows};
use crate::systems::physics::PhysicsParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "render/visual.rs"]
mod visual;
mod facade;

pub use facade::IntroSimulation;
pub use perf_stats::IntroStats;
pub use visual::{VisualState, VISUAL_STRIDE};

use perf_timer::FrameTimer;

/// What happened on one `advance_frame`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub phase: Phase,
    /// First frame of `phase`
    pub entered: bool,
}

/// The intro simulation
pub struct IntroCore {
    config: IntroConfig,
    params: PhysicsParams,
    windows: PhaseWindows,
    particles: Vec<Particle>,

    // State
    frame: u64,
    phase: Phase,
    /// Eased settle progress of the last settle frame
    settle_eased: f32,
    rng: Rng,

    // Stats
    stats_enabled: bool,
    stats: IntroStats,
}

impl IntroCore {
    /// Create an empty intro for a viewport with the shipped tuning
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u32) -> Self {
        init::create_intro_core(IntroConfig::default(), viewport_width, viewport_height, seed)
    }

    pub fn with_config(config: IntroConfig, viewport_width: f32, viewport_height: f32, seed: u32) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_intro_core(config, viewport_width, viewport_height, seed))
    }

    pub fn with_config_json(json: &str, viewport_width: f32, viewport_height: f32, seed: u32) -> Result<Self, String> {
        let config = IntroConfig::from_json(json)?;
        Ok(init::create_intro_core(config, viewport_width, viewport_height, seed))
    }

    pub fn config(&self) -> &IntroConfig { &self.config }

    pub fn viewport(&self) -> Vec2 { self.params.viewport }

    pub fn windows(&self) -> PhaseWindows { self.windows }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn is_complete(&self) -> bool { self.phase == Phase::Complete }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Launch a particle for an icon laid out at `slot`.
    /// Only possible before the first frame; returns false afterwards.
    pub fn add_icon(&mut self, slot: IconSlot) -> bool {
        init::add_icon(self, slot)
    }

    /// Advance one frame. A no-op once Complete.
    pub fn advance_frame(&mut self) -> FrameReport {
        step::advance_frame(self)
    }

    /// Run frames until Complete; returns the number of frames advanced
    pub fn run_to_completion(&mut self) -> u64 {
        let start = self.frame;
        while !self.is_complete() {
            self.advance_frame();
        }
        self.frame - start
    }

    /// Current visual state of every particle, in insertion order
    pub fn visual_states(&self) -> Vec<VisualState> {
        visual::visual_states(self)
    }

    /// Flattened visual states, `VISUAL_STRIDE` floats per particle
    pub fn write_visual_buffer(&self, out: &mut Vec<f32>) {
        visual::write_visual_buffer(self, out);
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_stats(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    /// Last frame's stats (zeros when disabled)
    pub fn stats(&self) -> IntroStats {
        self.stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
