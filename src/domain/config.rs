//! Intro tuning parameters
//!
//! Every knob has a default matching the shipped page. Hosts may override
//! any subset through a camelCase JSON object; missing keys keep defaults.

use serde::{Deserialize, Serialize};

use super::phase::PhaseWindows;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroConfig {
    // Phase windows (frames)
    pub scatter_frames: u32,
    pub collide_frames: u32,
    pub settle_frames: u32,

    // Integration
    pub friction: f32,
    pub wall_padding: f32,
    pub wall_restitution: f32,
    pub center_force: f32,
    pub center_deadzone: f32,
    pub collision_restitution: f32,

    // Launch
    pub min_speed: f32,
    pub max_speed: f32,
    pub velocity_jitter: f32,
    pub edge_offset_max: f32,
    /// Margin past the top and left edges, where the icon's own extent must also clear
    pub near_edge_margin: f32,
    /// Margin past the right and bottom edges
    pub far_edge_margin: f32,
    pub default_icon_size: f32,

    // Presentation
    pub rotation_factor: f32,
    pub start_scale: f32,
    pub start_opacity: f32,
    pub z_index: i32,
    pub float_class: String,

    // Browser timers (ms)
    pub start_delay_ms: i32,
    pub fade_out_ms: i32,
    pub cleanup_stagger_ms: i32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            scatter_frames: 140,
            collide_frames: 180,
            settle_frames: 90,
            friction: 0.985,
            wall_padding: 20.0,
            wall_restitution: 0.8,
            center_force: 0.08,
            center_deadzone: 50.0,
            collision_restitution: 0.7,
            min_speed: 5.0,
            max_speed: 8.0,
            velocity_jitter: 1.5,
            edge_offset_max: 150.0,
            near_edge_margin: 100.0,
            far_edge_margin: 50.0,
            default_icon_size: 60.0,
            rotation_factor: 2.0,
            start_scale: 0.9,
            start_opacity: 0.7,
            z_index: 100,
            float_class: "floating".to_string(),
            start_delay_ms: 300,
            fade_out_ms: 300,
            cleanup_stagger_ms: 50,
        }
    }
}

impl IntroConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: IntroConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn windows(&self) -> PhaseWindows {
        PhaseWindows {
            scatter: self.scatter_frames as u64,
            collide: self.collide_frames as u64,
            settle: self.settle_frames as u64,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.scatter_frames == 0 || self.collide_frames == 0 || self.settle_frames == 0 {
            return Err(format!(
                "phase windows must be at least one frame: scatter={} collide={} settle={}",
                self.scatter_frames, self.collide_frames, self.settle_frames
            ));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be in (0, 1]: {}", self.friction));
        }
        check_unit("wallRestitution", self.wall_restitution)?;
        check_unit("collisionRestitution", self.collision_restitution)?;
        check_unit("startOpacity", self.start_opacity)?;
        if self.min_speed > self.max_speed {
            return Err(format!(
                "minSpeed {} exceeds maxSpeed {}",
                self.min_speed, self.max_speed
            ));
        }
        for (name, v) in [
            ("wallPadding", self.wall_padding),
            ("centerForce", self.center_force),
            ("centerDeadzone", self.center_deadzone),
            ("minSpeed", self.min_speed),
            ("maxSpeed", self.max_speed),
            ("velocityJitter", self.velocity_jitter),
            ("edgeOffsetMax", self.edge_offset_max),
            ("nearEdgeMargin", self.near_edge_margin),
            ("farEdgeMargin", self.far_edge_margin),
            ("startScale", self.start_scale),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(format!("{} must be a non-negative number: {}", name, v));
            }
        }
        if !self.rotation_factor.is_finite() {
            return Err(format!("rotationFactor must be finite: {}", self.rotation_factor));
        }
        if !(self.default_icon_size.is_finite() && self.default_icon_size > 0.0) {
            return Err(format!(
                "defaultIconSize must be positive: {}",
                self.default_icon_size
            ));
        }
        if self.start_delay_ms < 0 || self.fade_out_ms < 0 || self.cleanup_stagger_ms < 0 {
            return Err("timer delays must be non-negative".to_string());
        }
        Ok(())
    }
}

fn check_unit(name: &str, v: f32) -> Result<(), String> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(format!("{} must be in [0, 1]: {}", name, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = IntroConfig::from_json("{}").unwrap();
        assert_eq!(config, IntroConfig::default());
        assert_eq!(config.windows().complete_after(), 410);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = IntroConfig::from_json(r#"{"settleFrames": 30, "friction": 0.9}"#).unwrap();
        assert_eq!(config.settle_frames, 30);
        assert_eq!(config.friction, 0.9);
        assert_eq!(config.scatter_frames, 140);
        assert_eq!(config.float_class, "floating");
    }

    #[test]
    fn rejects_zero_length_settle_window() {
        let err = IntroConfig::from_json(r#"{"settleFrames": 0}"#).unwrap_err();
        assert!(err.contains("phase windows"));
    }

    #[test]
    fn rejects_out_of_range_restitution_and_bad_json() {
        assert!(IntroConfig::from_json(r#"{"wallRestitution": 1.5}"#).is_err());
        assert!(IntroConfig::from_json(r#"{"minSpeed": 9, "maxSpeed": 8}"#).is_err());
        assert!(IntroConfig::from_json("not json").is_err());
    }

    #[test]
    fn rejects_speeds_and_rotation_that_overflow_f32() {
        // 1e39 parses to f32::INFINITY
        let err = IntroConfig::from_json(r#"{"maxSpeed": 1e39}"#).unwrap_err();
        assert!(err.contains("maxSpeed"), "{}", err);
        let err = IntroConfig::from_json(r#"{"rotationFactor": -1e39}"#).unwrap_err();
        assert!(err.contains("rotationFactor"), "{}", err);
        assert!(IntroConfig::from_json(r#"{"rotationFactor": -2}"#).is_ok());
    }

    #[test]
    fn json_round_trip_is_stable() {
        let config = IntroConfig::default();
        let back = IntroConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
