use crate::domain::phase::Phase;
use crate::systems::physics::{step_particles, StepCounters};
use crate::systems::settle::settle_particles;

use super::{FrameReport, FrameTimer, IntroCore};

pub(super) fn advance_frame(core: &mut IntroCore) -> FrameReport {
    if core.phase == Phase::Complete {
        return FrameReport {
            frame: core.frame,
            phase: Phase::Complete,
            entered: false,
        };
    }

    let stats_on = core.stats_enabled;
    let timer = if stats_on { Some(FrameTimer::start()) } else { None };

    core.frame += 1;
    let next = Phase::at(core.frame, &core.windows);
    let entered = next != core.phase;
    if entered {
        enter_phase(core, next);
    }
    core.phase = next;

    let counters = match next {
        Phase::Scattering => step_particles(&mut core.particles, &core.params, false),
        Phase::Colliding => step_particles(&mut core.particles, &core.params, true),
        Phase::Settling => {
            let progress = core.windows.settle_progress(core.frame);
            core.settle_eased = settle_particles(&mut core.particles, progress);
            StepCounters::default()
        }
        Phase::Pending | Phase::Complete => StepCounters::default(),
    };

    if let Some(timer) = timer {
        core.stats.record(core.frame, next, &counters, &core.particles, timer.elapsed_ms());
    }

    FrameReport {
        frame: core.frame,
        phase: next,
        entered,
    }
}

/// Phase-entry hooks. Runs before the first frame of `next` is simulated.
fn enter_phase(core: &mut IntroCore, next: Phase) {
    match next {
        Phase::Settling => {
            for particle in core.particles.iter_mut() {
                particle.snapshot_settle_origin();
            }
        }
        Phase::Complete => {
            core.settle_eased = 1.0;
            console_log!(
                "intro complete after {} frames ({} icons)",
                core.frame,
                core.particles.len()
            );
            return;
        }
        _ => {}
    }
    console_log!("intro phase -> {} at frame {}", next.as_str(), core.frame);
}
