//! Data-driven game balance
//!
//! Every numeric constant the simulation, driver and confetti use. Loaded from
//! JSON; any field left out keeps its default from [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas / projection ===
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub iso_scale_x: f64,
    pub iso_scale_y: f64,
    pub world_offset_x: f64,
    pub world_offset_y: f64,

    // === Ball motion ===
    pub ball_radius: f64,
    pub friction: f64,
    pub stop_threshold: f64,
    pub wall_bounce: f64,

    // === Hole ===
    pub hole_radius: f64,
    pub magnet_radius: f64,
    pub magnet_force: f64,
    pub magnet_engage_speed: f64,
    pub win_radius: f64,

    // === Launch ===
    pub max_power: f64,
    pub power_scale: f64,
    pub launch_scale: f64,
    pub grab_radius: f64,

    // === Attempts ===
    pub max_attempts: u8,
    pub reset_delay_ticks: u32,

    // === Confetti ===
    pub confetti_count: usize,
    pub confetti_gravity: f64,
    pub confetti_drag: f64,

    // === Scenery ===
    pub cloud_count: usize,

    /// Seed for the confetti and cloud RNGs
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            iso_scale_x: ISO_SCALE_X,
            iso_scale_y: ISO_SCALE_Y,
            world_offset_x: WORLD_OFFSET_X,
            world_offset_y: WORLD_OFFSET_Y,

            ball_radius: BALL_RADIUS,
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
            wall_bounce: WALL_BOUNCE,

            hole_radius: HOLE_RADIUS,
            magnet_radius: MAGNET_RADIUS,
            magnet_force: MAGNET_FORCE,
            magnet_engage_speed: MAGNET_ENGAGE_SPEED,
            win_radius: WIN_RADIUS,

            max_power: MAX_POWER,
            power_scale: POWER_SCALE,
            launch_scale: LAUNCH_SCALE,
            grab_radius: GRAB_RADIUS,

            max_attempts: MAX_ATTEMPTS,
            reset_delay_ticks: RESET_DELAY_TICKS,

            confetti_count: CONFETTI_COUNT,
            confetti_gravity: CONFETTI_GRAVITY,
            confetti_drag: CONFETTI_DRAG,

            cloud_count: CLOUD_COUNT,

            seed: 0x1503_7075_7474,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation can't work with
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(GameError::InvalidTuning(reason.to_string()));

        if !(self.ball_radius > 0.0) {
            return fail("ball_radius must be positive");
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return fail("friction must be in (0, 1]");
        }
        if !(self.wall_bounce > 0.0 && self.wall_bounce <= 1.0) {
            return fail("wall_bounce must be in (0, 1]");
        }
        if self.stop_threshold < 0.0 {
            return fail("stop_threshold must not be negative");
        }
        if !(self.win_radius < self.magnet_radius) {
            return fail("win_radius must be smaller than magnet_radius");
        }
        if self.iso_scale_x == 0.0 || self.iso_scale_y == 0.0 {
            return fail("projection scales must be non-zero");
        }
        if !(self.max_power > 0.0) {
            return fail("max_power must be positive");
        }
        if self.max_attempts == 0 {
            return fail("max_attempts must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert!(tuning.win_radius < tuning.magnet_radius);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "friction": 0.9, "max_attempts": 5 }"#).unwrap();
        assert_eq!(tuning.friction, 0.9);
        assert_eq!(tuning.max_attempts, 5);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
        assert_eq!(tuning.win_radius, WIN_RADIUS);
    }

    #[test]
    fn test_rejects_win_radius_outside_magnet() {
        let err = Tuning::from_json(r#"{ "win_radius": 25.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_zero_ball_radius() {
        let tuning = Tuning {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ friction: }"),
            Err(GameError::Json(_))
        ));
    }
}
