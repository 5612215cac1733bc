//! Intro phases as a pure function of the frame counter

use wasm_bindgen::prelude::*;

/// Frame lengths of the three timed phases
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseWindows {
    pub scatter: u64,
    pub collide: u64,
    pub settle: u64,
}

impl PhaseWindows {
    /// Last frame that still runs collision physics
    pub fn collide_end(&self) -> u64 {
        self.scatter + self.collide
    }

    /// Last frame of the settle interpolation; everything after is Complete
    pub fn complete_after(&self) -> u64 {
        self.scatter + self.collide + self.settle
    }

    /// Settle progress in [0, 1] for `frame`
    pub fn settle_progress(&self, frame: u64) -> f32 {
        let into = frame.saturating_sub(self.collide_end());
        (into as f32 / self.settle.max(1) as f32).clamp(0.0, 1.0)
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Frame 0, nothing simulated yet
    Pending = 0,
    Scattering = 1,
    Colliding = 2,
    Settling = 3,
    Complete = 4,
}

impl Phase {
    /// The only transition function: phase for frame `frame`.
    pub fn at(frame: u64, windows: &PhaseWindows) -> Phase {
        if frame == 0 {
            Phase::Pending
        } else if frame <= windows.scatter {
            Phase::Scattering
        } else if frame <= windows.collide_end() {
            Phase::Colliding
        } else if frame <= windows.complete_after() {
            Phase::Settling
        } else {
            Phase::Complete
        }
    }

    /// Scattering and Colliding share the integrator
    pub fn runs_physics(self) -> bool {
        matches!(self, Phase::Scattering | Phase::Colliding)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Scattering => "scattering",
            Phase::Colliding => "colliding",
            Phase::Settling => "settling",
            Phase::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: PhaseWindows = PhaseWindows { scatter: 140, collide: 180, settle: 90 };

    #[test]
    fn boundaries_for_shipped_windows() {
        assert_eq!(Phase::at(0, &SHIPPED), Phase::Pending);
        assert_eq!(Phase::at(1, &SHIPPED), Phase::Scattering);
        assert_eq!(Phase::at(140, &SHIPPED), Phase::Scattering);
        assert_eq!(Phase::at(141, &SHIPPED), Phase::Colliding);
        assert_eq!(Phase::at(320, &SHIPPED), Phase::Colliding);
        assert_eq!(Phase::at(321, &SHIPPED), Phase::Settling);
        assert_eq!(Phase::at(410, &SHIPPED), Phase::Settling);
        assert_eq!(Phase::at(411, &SHIPPED), Phase::Complete);
        assert_eq!(Phase::at(u64::MAX, &SHIPPED), Phase::Complete);
    }

    #[test]
    fn phases_never_go_backwards() {
        let mut prev = Phase::Pending as u8;
        for f in 0..500 {
            let p = Phase::at(f, &SHIPPED) as u8;
            assert!(p >= prev, "frame {} regressed", f);
            prev = p;
        }
    }

    #[test]
    fn settle_progress_spans_window() {
        assert_eq!(SHIPPED.settle_progress(320), 0.0);
        assert!((SHIPPED.settle_progress(365) - 0.5).abs() < 1e-6);
        assert_eq!(SHIPPED.settle_progress(410), 1.0);
        assert_eq!(SHIPPED.settle_progress(1000), 1.0);
    }
}
