use crate::core::Vec2;
use crate::domain::config::IntroConfig;

/// Integration constants, copied out of the config once per simulation
#[derive(Clone, Copy, Debug)]
pub struct PhysicsParams {
    pub viewport: Vec2,
    pub friction: f32,
    pub wall_padding: f32,
    pub wall_restitution: f32,
    pub center_force: f32,
    pub center_deadzone: f32,
    pub collision_restitution: f32,
}

impl PhysicsParams {
    pub fn from_config(config: &IntroConfig, viewport: Vec2) -> Self {
        Self {
            viewport,
            friction: config.friction,
            wall_padding: config.wall_padding,
            wall_restitution: config.wall_restitution,
            center_force: config.center_force,
            center_deadzone: config.center_deadzone,
            collision_restitution: config.collision_restitution,
        }
    }

    #[inline]
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }
}

/// What one physics frame did (feeds the optional stats)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub wall_bounces: u32,
    pub collisions_resolved: u32,
}
