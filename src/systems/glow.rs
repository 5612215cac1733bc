//! Ambient glow that trails the cursor

use crate::core::Vec2;

/// Fraction of the remaining gap closed per frame
pub const GLOW_SMOOTHING: f32 = 0.08;
/// Half the glow element's size; translates its center onto the point
pub const GLOW_HALF_EXTENT: f32 = 350.0;

#[derive(Clone, Copy, Debug)]
pub struct GlowFollower {
    pos: Vec2,
    cursor: Vec2,
    smoothing: f32,
}

impl GlowFollower {
    /// Glow and cursor both start at the viewport center
    pub fn new(viewport: Vec2) -> Self {
        let center = viewport * 0.5;
        Self {
            pos: center,
            cursor: center,
            smoothing: GLOW_SMOOTHING,
        }
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// One frame of exponential smoothing; returns the new glow center
    pub fn tick(&mut self) -> Vec2 {
        self.pos += (self.cursor - self.pos) * self.smoothing;
        self.pos
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Top-left translation for the glow element
    pub fn translation(&self) -> Vec2 {
        self.pos - Vec2::new(GLOW_HALF_EXTENT, GLOW_HALF_EXTENT)
    }
}
