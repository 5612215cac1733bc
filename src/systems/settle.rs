//! Settle - eased hand-over from free flight to the layout slot
//!
//! Physics is off for this phase. Each particle slides from the position it
//! had when Settling began to its target along a cubic ease-out, so the rest
//! state is the same no matter how chaotic the flight was.

use crate::core::easing::ease_out_cubic;
use crate::domain::particle::Particle;

/// Place every particle for settle `progress` in [0, 1]. Returns the eased value.
pub fn settle_particles(particles: &mut [Particle], progress: f32) -> f32 {
    let eased = ease_out_cubic(progress);

    for particle in particles.iter_mut() {
        // The phase-entry hook normally fills this; fall back to "here" if it didn't run
        let origin = *particle.settle_origin.get_or_insert(particle.pos);
        particle.pos = origin.lerp(particle.target, eased);
    }

    eased
}
