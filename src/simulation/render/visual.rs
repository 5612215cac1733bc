use crate::core::easing::lerp;
use crate::domain::particle::Particle;
use crate::domain::phase::Phase;

use super::IntroCore;

/// Floats per particle in the flattened buffer: left, top, rotation, scale, opacity
pub const VISUAL_STRIDE: usize = 5;

/// Style values for one icon on the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub left: f32,
    pub top: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl VisualState {
    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotation_deg, self.scale)
    }
}

pub(super) fn visual_states(core: &IntroCore) -> Vec<VisualState> {
    core.particles
        .iter()
        .map(|p| visual_for(p, core))
        .collect()
}

pub(super) fn write_visual_buffer(core: &IntroCore, out: &mut Vec<f32>) {
    out.clear();
    out.reserve(core.particles.len() * VISUAL_STRIDE);
    for p in core.particles.iter() {
        let v = visual_for(p, core);
        out.extend_from_slice(&[v.left, v.top, v.rotation_deg, v.scale, v.opacity]);
    }
}

/// Rotation is cosmetic: it follows horizontal speed in flight and
/// unwinds to zero while settling.
fn visual_for(p: &Particle, core: &IntroCore) -> VisualState {
    let config = &core.config;
    let settle_eased = core.settle_eased;
    let spin = p.velocity.x * config.rotation_factor;

    let (rotation_deg, scale, opacity) = match core.phase {
        Phase::Pending | Phase::Scattering | Phase::Colliding => {
            (spin, config.start_scale, config.start_opacity)
        }
        Phase::Settling => (
            (1.0 - settle_eased) * spin,
            lerp(config.start_scale, 1.0, settle_eased),
            lerp(config.start_opacity, 1.0, settle_eased),
        ),
        Phase::Complete => (0.0, 1.0, 1.0),
    };

    VisualState {
        left: p.pos.x,
        top: p.pos.y,
        rotation_deg,
        scale,
        opacity,
    }
}
