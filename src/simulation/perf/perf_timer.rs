//! Frame timing for `IntroStats`
//!
//! Browser builds read `performance.now()` and fall back to `Date.now()`
//! where the Performance API is missing. Native builds measure from a
//! process-wide `Instant` so test runs report real durations too.

#[cfg(target_arch = "wasm32")]
pub(crate) fn clock_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Time spent inside one `advance_frame`
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameTimer {
    started_ms: f64,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        FrameTimer { started_ms: clock_ms() }
    }

    /// Clamped at zero; `Date.now()` can step backwards with the system clock
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (clock_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic_natively() {
        let a = clock_ms();
        let b = clock_ms();
        assert!(b >= a);
    }

    #[test]
    fn elapsed_covers_busy_work() {
        let timer = FrameTimer::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.elapsed_ms() >= 1.0);
    }
}
