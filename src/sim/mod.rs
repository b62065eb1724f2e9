//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Stable iteration order (walls, then obstacles, in level order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{CollisionResult, ball_rect_collision, reflect_velocity};
pub use geometry::Rect;
pub use state::{Ball, Direction, GamePhase, Level, Obstacle, ObstacleKind, TickEvent};
pub use tick::{Physics, PhysicsParams};
pub use vector::{PooledVec, Vec2, VecExt, VecPool};
