//! Waitlist counter roll-up

use crate::core::easing::ease_out_cubic;

pub const COUNTER_DURATION_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub start: u64,
    pub end: u64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value, floored like the page always did
    pub fn value(&self, elapsed_ms: f64) -> u64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.end;
        }
        let eased = ease_out_cubic(progress as f32) as f64;
        let span = self.end as f64 - self.start as f64;
        (self.start as f64 + span * eased).floor().max(0.0) as u64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Parse a displayed count such as "12,847" or "12,847+"
pub fn parse_count(text: &str) -> Result<u64, String> {
    let digits: String = text
        .trim()
        .trim_end_matches('+')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits
        .parse::<u64>()
        .map_err(|e| format!("invalid waitlist count {:?}: {}", text, e))
}

/// `12847` -> `"12,847"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inner HTML for the counter element
pub fn render_count(value: u64) -> String {
    format!("{}<span>+</span>", format_count(value))
}
