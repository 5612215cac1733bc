//! Physics System - scatter/collide integration for intro icons
//!
//! Key concepts:
//! - Velocity persists across frames (pixels per frame, dt = 1 frame)
//! - Colliding adds a soft pull toward the viewport center
//! - Friction damps velocity every frame
//! - Walls clamp the bounding box into the padded viewport and reflect velocity
//! - Colliding resolves pairwise overlaps with a point-mass impulse, then
//!   pulls anything the correction pushed into the padding back onto the wall

mod bounds;
mod collision;
mod forces;
mod types;

pub use bounds::{bounce_off_walls, clamp_into_walls};
pub use collision::{min_distance, resolve_collisions, resolve_pair};
pub use forces::{apply_center_force, apply_friction, integrate};
pub use types::{PhysicsParams, StepCounters};

use crate::domain::particle::Particle;

/// Advance every particle by one frame.
///
/// Scattering and Colliding share this routine; `colliding` only switches
/// on the centering force and the pair pass.
pub fn step_particles(particles: &mut [Particle], params: &PhysicsParams, colliding: bool) -> StepCounters {
    let mut counters = StepCounters::default();

    for particle in particles.iter_mut() {
        if colliding {
            apply_center_force(particle, params);
        }
        apply_friction(particle, params);
        integrate(particle);
        counters.wall_bounces += bounce_off_walls(particle, params);
    }

    if colliding {
        counters.collisions_resolved = resolve_collisions(particles, params);
        if counters.collisions_resolved > 0 {
            for particle in particles.iter_mut() {
                clamp_into_walls(particle, params);
            }
        }
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::config::IntroConfig;
    use crate::domain::particle::IconSlot;

    fn params() -> PhysicsParams {
        PhysicsParams::from_config(&IntroConfig::default(), Vec2::new(800.0, 600.0))
    }

    fn pair_at_left_wall() -> Vec<Particle> {
        // 40px icons 10px apart at the left padding: 30px overlap
        let slot = IconSlot::new(0.0, 0.0, 40.0, 40.0);
        vec![
            Particle::new(Vec2::new(20.0, 280.0), Vec2::zero(), &slot, 60.0),
            Particle::new(Vec2::new(30.0, 280.0), Vec2::zero(), &slot, 60.0),
        ]
    }

    #[test]
    fn pair_correction_alone_pushes_into_padding() {
        let mut ps = pair_at_left_wall();
        assert_eq!(resolve_collisions(&mut ps, &params()), 1);
        assert!((ps[0].pos.x - 5.0).abs() < 1e-4);
        assert!((ps[1].pos.x - 45.0).abs() < 1e-4);
    }

    #[test]
    fn colliding_step_leaves_pair_inside_padding() {
        let mut ps = pair_at_left_wall();
        let counters = step_particles(&mut ps, &params(), true);
        assert_eq!(counters.collisions_resolved, 1);
        assert_eq!(ps[0].pos.x, 20.0);
        assert!(ps[1].pos.x > 40.0);
        for p in &ps {
            assert!(p.pos.y >= 20.0 && p.pos.y <= 600.0 - 20.0 - 40.0);
        }
    }

    #[test]
    fn scattering_step_skips_pair_pass() {
        let mut ps = pair_at_left_wall();
        let counters = step_particles(&mut ps, &params(), false);
        assert_eq!(counters.collisions_resolved, 0);
        assert_eq!(ps[0].pos.x, 20.0);
        assert_eq!(ps[1].pos.x, 30.0);
    }
}
