use crate::domain::particle::Particle;

use super::types::PhysicsParams;

/// Keep the bounding box inside the padded viewport.
///
/// Each axis is clamped on its own; a clamped axis has its velocity
/// reflected and scaled by the wall restitution. Returns how many axes hit.
pub fn bounce_off_walls(particle: &mut Particle, params: &PhysicsParams) -> u32 {
    let mut hits = 0;

    if let Some(v) = bounce_axis(
        &mut particle.pos.x,
        particle.velocity.x,
        particle.size.x,
        params.viewport.x,
        params,
    ) {
        particle.velocity.x = v;
        hits += 1;
    }

    if let Some(v) = bounce_axis(
        &mut particle.pos.y,
        particle.velocity.y,
        particle.size.y,
        params.viewport.y,
        params,
    ) {
        particle.velocity.y = v;
        hits += 1;
    }

    hits
}

/// Pull a particle that a collision correction pushed into the padding back
/// onto the wall. Velocity is left alone; the next frame's bounce reflects it.
/// Returns true if either axis moved.
pub fn clamp_into_walls(particle: &mut Particle, params: &PhysicsParams) -> bool {
    let (min_x, max_x) = axis_limits(particle.size.x, params.viewport.x, params);
    let (min_y, max_y) = axis_limits(particle.size.y, params.viewport.y, params);
    let before = particle.pos;
    particle.pos.x = particle.pos.x.clamp(min_x, max_x);
    particle.pos.y = particle.pos.y.clamp(min_y, max_y);
    particle.pos != before
}

#[inline]
fn axis_limits(extent: f32, viewport: f32, params: &PhysicsParams) -> (f32, f32) {
    let min = params.wall_padding;
    // Icon wider than the play area: pin it to the near wall
    let max = (viewport - params.wall_padding - extent).max(min);
    (min, max)
}

#[inline]
fn bounce_axis(pos: &mut f32, vel: f32, extent: f32, viewport: f32, params: &PhysicsParams) -> Option<f32> {
    let (min, max) = axis_limits(extent, viewport, params);

    if *pos < min {
        *pos = min;
        Some(-vel * params.wall_restitution)
    } else if *pos > max {
        *pos = max;
        Some(-vel * params.wall_restitution)
    } else {
        None
    }
}
