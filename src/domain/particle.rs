use crate::core::Vec2;

/// Where an icon sits once layout has placed it (viewport-absolute pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSlot {
    /// Center of the element's layout box
    pub center: Vec2,
    /// Rendered width/height; zero or junk falls back to the default size
    pub size: Vec2,
}

impl IconSlot {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(center_x, center_y),
            size: Vec2::new(width, height),
        }
    }
}

/// Particle - one icon flying through the intro
#[derive(Clone, Debug)]
pub struct Particle {
    // === Physics State ===
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    /// `width * height / 1000`
    pub mass: f32,

    // === Shape ===
    pub size: Vec2,

    // === Settle ===
    /// Top-left that puts the icon's center on its layout slot
    pub target: Vec2,
    /// Snapshot taken when Settling begins
    pub settle_origin: Option<Vec2>,
}

impl Particle {
    pub fn new(pos: Vec2, velocity: Vec2, slot: &IconSlot, default_size: f32) -> Self {
        let size = sanitize_size(slot.size, default_size);
        Self {
            pos,
            velocity,
            mass: mass_for(size),
            size,
            target: slot.center - size * 0.5,
            settle_origin: None,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Capture the settle origin. Later calls leave the first snapshot alone.
    pub fn snapshot_settle_origin(&mut self) {
        if self.settle_origin.is_none() {
            self.settle_origin = Some(self.pos);
        }
    }
}

#[inline]
pub fn mass_for(size: Vec2) -> f32 {
    size.x * size.y / 1000.0
}

/// Replace unmeasurable axes so mass and overlap math never divide by zero
pub fn sanitize_size(size: Vec2, default_size: f32) -> Vec2 {
    let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { default_size };
    Vec2::new(fix(size.x), fix(size.y))
}
