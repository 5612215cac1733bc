use crate::core::random::Rng;
use crate::core::Vec2;
use crate::domain::config::IntroConfig;
use crate::domain::particle::{IconSlot, Particle};
use crate::domain::phase::Phase;
use crate::systems::physics::PhysicsParams;

use super::perf_stats::IntroStats;
use super::IntroCore;

pub(super) fn create_intro_core(config: IntroConfig, viewport_width: f32, viewport_height: f32, seed: u32) -> IntroCore {
    let viewport = Vec2::new(viewport_width.max(0.0), viewport_height.max(0.0));
    IntroCore {
        params: PhysicsParams::from_config(&config, viewport),
        windows: config.windows(),
        config,
        particles: Vec::new(),
        frame: 0,
        phase: Phase::Pending,
        settle_eased: 0.0,
        rng: Rng::new(seed),
        stats_enabled: false,
        stats: IntroStats::default(),
    }
}

pub(super) fn add_icon(core: &mut IntroCore, slot: IconSlot) -> bool {
    if core.phase != Phase::Pending {
        console_warn!("intro already running, ignoring icon at ({}, {})", slot.center.x, slot.center.y);
        return false;
    }

    let pos = spawn_position(&mut core.rng, core.params.viewport, &core.config);
    let velocity = launch_velocity(&mut core.rng, pos, core.params.viewport_center(), &core.config);
    core.particles
        .push(Particle::new(pos, velocity, &slot, core.config.default_icon_size));
    true
}

/// Random point just past one of the four viewport edges
pub(crate) fn spawn_position(rng: &mut Rng, viewport: Vec2, config: &IntroConfig) -> Vec2 {
    let edge = rng.below(4);
    let offset = rng.next_f32() * config.edge_offset_max;
    let near = config.near_edge_margin + offset;
    let far = config.far_edge_margin + offset;

    match edge {
        // top
        0 => Vec2::new(rng.next_f32() * viewport.x, -near),
        // right
        1 => Vec2::new(viewport.x + far, rng.next_f32() * viewport.y),
        // bottom
        2 => Vec2::new(rng.next_f32() * viewport.x, viewport.y + far),
        // left
        _ => Vec2::new(-near, rng.next_f32() * viewport.y),
    }
}

/// Aimed at the viewport center, random speed, jittered per axis
pub(crate) fn launch_velocity(rng: &mut Rng, from: Vec2, center: Vec2, config: &IntroConfig) -> Vec2 {
    let dir = (center - from).normalize();
    let speed = rng.range(config.min_speed, config.max_speed);
    let jitter = Vec2::new(
        rng.range(-config.velocity_jitter, config.velocity_jitter),
        rng.range(-config.velocity_jitter, config.velocity_jitter),
    );
    dir * speed + jitter
}
