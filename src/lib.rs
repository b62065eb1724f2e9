//! Iso Putt - an isometric mini-golf physics game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, wall collisions, magnet, win check)
//! - `projection`: World <-> isometric screen mapping
//! - `level`: Level templates and the level catalog
//! - `game`: Phase driver (aiming, moving, won), attempts and resets
//! - `input`: Drag gesture to launch velocity
//! - `particles`: Win confetti
//! - `clouds`: Drifting sky layer behind the court
//! - `renderer`: Screen-space draw lists for a rendering backend
//! - `tuning`: Data-driven game balance

pub mod clouds;
pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod particles;
pub mod projection;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use game::{Game, GameSignal};
pub use level::{LevelCatalog, LevelData};
pub use projection::IsoProjection;
pub use tuning::Tuning;

/// Default tuning values
pub mod consts {
    /// Logical canvas size in pixels
    pub const CANVAS_WIDTH: f64 = 360.0;
    pub const CANVAS_HEIGHT: f64 = 640.0;

    /// Isometric projection
    pub const ISO_SCALE_X: f64 = 0.5;
    pub const ISO_SCALE_Y: f64 = 0.25;
    pub const WORLD_OFFSET_X: f64 = 260.0;
    pub const WORLD_OFFSET_Y: f64 = 200.0;

    /// Velocity retained per tick while rolling freely
    pub const FRICTION: f64 = 0.96;
    /// Below this speed the ball is stopped dead
    pub const STOP_THRESHOLD: f64 = 0.05;
    /// Velocity retained after a wall bounce
    pub const WALL_BOUNCE: f64 = 0.7;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 6.0;
    pub const HOLE_RADIUS: f64 = 10.0;

    /// Magnet pulls a slow ball toward the hole inside this distance
    pub const MAGNET_RADIUS: f64 = 20.0;
    /// Pull added per tick (not distance scaled)
    pub const MAGNET_FORCE: f64 = 0.1;
    /// Magnet only engages below this speed
    pub const MAGNET_ENGAGE_SPEED: f64 = 3.0;
    /// Ball is sunk inside this distance
    pub const WIN_RADIUS: f64 = 8.0;

    /// Launch power cap (world units/tick)
    pub const MAX_POWER: f64 = 15.0;
    /// Screen drag length to power; a drag must exceed power 1 to count
    pub const POWER_SCALE: f64 = 0.08;
    /// World pull length to launch speed
    pub const LAUNCH_SCALE: f64 = 0.15;
    /// Pointer must go down this close to the ball (pixels)
    pub const GRAB_RADIUS: f64 = 40.0;

    pub const MAX_ATTEMPTS: u8 = 3;
    /// Delay before a level restarts after the last attempt (1s at 60 Hz)
    pub const RESET_DELAY_TICKS: u32 = 60;

    /// Confetti
    pub const CONFETTI_COUNT: usize = 100;
    pub const CONFETTI_GRAVITY: f64 = 0.2;
    pub const CONFETTI_DRAG: f64 = 0.95;

    /// Clouds drifting across the sky
    pub const CLOUD_COUNT: usize = 8;
}
