use wasm_bindgen::prelude::*;

use crate::domain::particle::Particle;
use crate::domain::phase::Phase;
use crate::systems::physics::StepCounters;

/// Snapshot of the last simulated frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct IntroStats {
    pub(super) step_ms: f64,
    pub(super) frame: u32,
    pub(super) phase: u8,
    pub(super) particle_count: u32,
    pub(super) collisions_resolved: u32,
    pub(super) wall_bounces: u32,
    pub(super) max_speed: f32,
}

impl IntroStats {
    pub(crate) fn reset(&mut self) {
        *self = IntroStats::default();
    }

    pub(crate) fn record(
        &mut self,
        frame: u64,
        phase: Phase,
        counters: &StepCounters,
        particles: &[Particle],
        step_ms: f64,
    ) {
        self.step_ms = step_ms;
        self.frame = frame.min(u32::MAX as u64) as u32;
        self.phase = phase as u8;
        self.particle_count = particles.len() as u32;
        self.collisions_resolved = counters.collisions_resolved;
        self.wall_bounces = counters.wall_bounces;
        self.max_speed = particles
            .iter()
            .map(|p| p.velocity.length())
            .fold(0.0, f32::max);
    }
}

#[wasm_bindgen]
impl IntroStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> u8 { self.phase }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
}
