use crate::domain::particle::Particle;

use super::types::PhysicsParams;

/// Soft pull toward the viewport center.
/// Inside the deadzone nothing is applied, so icons near the middle don't jitter.
#[inline]
pub fn apply_center_force(particle: &mut Particle, params: &PhysicsParams) {
    let to_center = params.viewport_center() - particle.center();
    let dist = to_center.length();

    if dist > params.center_deadzone {
        particle.velocity += to_center * (params.center_force / dist);
    }
}

/// Isotropic per-frame damping
#[inline]
pub fn apply_friction(particle: &mut Particle, params: &PhysicsParams) {
    particle.velocity *= params.friction;
}

/// Explicit Euler, dt = one frame
#[inline]
pub fn integrate(particle: &mut Particle) {
    particle.pos += particle.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::config::IntroConfig;
    use crate::domain::particle::IconSlot;

    fn params() -> PhysicsParams {
        PhysicsParams::from_config(&IntroConfig::default(), Vec2::new(1000.0, 800.0))
    }

    fn particle_at(x: f32, y: f32, v: Vec2) -> Particle {
        Particle::new(Vec2::new(x, y), v, &IconSlot::new(0.0, 0.0, 40.0, 40.0), 60.0)
    }

    #[test]
    fn friction_never_grows_speed() {
        let params = params();
        for v in [Vec2::new(7.0, -3.0), Vec2::new(-0.01, 0.0), Vec2::zero()] {
            let mut p = particle_at(100.0, 100.0, v);
            let before = p.velocity.length();
            apply_friction(&mut p, &params);
            assert!(p.velocity.length() <= before);
        }
    }

    #[test]
    fn center_force_points_inward_with_fixed_magnitude() {
        let params = params();
        // Center at (120, 400), viewport center at (500, 400)
        let mut p = particle_at(100.0, 380.0, Vec2::zero());
        apply_center_force(&mut p, &params);
        assert!((p.velocity.x - 0.08).abs() < 1e-6);
        assert!(p.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn center_force_skips_deadzone() {
        let params = params();
        // Center 30px left of the viewport center
        let mut p = particle_at(450.0, 380.0, Vec2::new(1.0, 1.0));
        apply_center_force(&mut p, &params);
        assert_eq!(p.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn integrate_adds_velocity_once() {
        let mut p = particle_at(10.0, 20.0, Vec2::new(3.0, -4.0));
        integrate(&mut p);
        assert_eq!(p.pos, Vec2::new(13.0, 16.0));
    }
}
