//! Simulation state types
//!
//! The ball, the live level the engine mutates, and the phase that gates
//! which parts of the tick run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::vector::{Vec2, VecExt};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for a drag
    Aiming,
    /// Ball rolling
    Moving,
    /// Ball sunk; terminal for this level
    Won,
}

/// Events reported by a physics tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Ball is in the hole (re-reported every tick while it stays there)
    Won,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// World units per tick
    pub vel: Vec2,
    pub radius: f64,
    /// False until a level places the ball
    pub active: bool,
}

impl Ball {
    pub fn new(radius: f64) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            active: false,
        }
    }

    /// Place the ball at rest at `start`
    pub fn activate(&mut self, start: Vec2) {
        self.pos.copy_from(start);
        self.vel.set(0.0, 0.0);
        self.active = true;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Travel direction of a moving wall (+1 / -1 on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(format!("direction must be 1 or -1, got {}", other)),
        }
    }
}

impl From<Direction> for i8 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Obstacle behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstacleKind {
    /// Oscillates along x between `anchor_x` and `anchor_x + range`
    MovingWall {
        speed: f64,
        range: f64,
        dir: Direction,
        #[serde(alias = "startX")]
        anchor_x: f64,
    },
    /// Decorative; drawn but never collided with
    #[serde(other)]
    Static,
}

/// A rectangle with a kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(flatten)]
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn moving_wall(rect: Rect, speed: f64, range: f64, dir: Direction) -> Self {
        Self {
            rect,
            kind: ObstacleKind::MovingWall {
                speed,
                range,
                dir,
                anchor_x: rect.x,
            },
        }
    }

    pub fn decoration(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Static,
        }
    }

    /// Only moving walls take part in collisions
    #[inline]
    pub fn is_collidable(&self) -> bool {
        matches!(self.kind, ObstacleKind::MovingWall { .. })
    }

    /// Advance one tick. The wall may overshoot its range by one step; the
    /// direction flips on the tick it leaves the range.
    pub fn advance(&mut self) {
        if let ObstacleKind::MovingWall {
            speed,
            range,
            ref mut dir,
            anchor_x,
        } = self.kind
        {
            self.rect.x += speed * dir.sign();
            if self.rect.x > anchor_x + range || self.rect.x < anchor_x {
                *dir = dir.reversed();
            }
        }
    }
}

/// A loaded level: the engine's private, mutable copy
#[derive(Debug, Clone)]
pub struct Level {
    /// Position in the catalog
    pub index: usize,
    pub start: Vec2,
    pub hole: Vec2,
    /// Shared with the template; walls never move
    pub walls: Arc<[Rect]>,
    /// Fresh copy per load
    pub obstacles: Vec<Obstacle>,
}

impl Level {
    /// Fill `out` with every rectangle the ball can hit, walls first
    pub fn collect_collidables(&self, out: &mut Vec<Rect>) {
        out.clear();
        out.extend_from_slice(&self.walls);
        out.extend(
            self.obstacles
                .iter()
                .filter(|o| o.is_collidable())
                .map(|o| o.rect),
        );
    }
}
