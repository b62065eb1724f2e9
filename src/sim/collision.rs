//! Collision detection and response for a circle against rectangles
//!
//! Only axis-aligned rectangles exist on the court, so a contact is found by
//! clamping the ball centre onto the rectangle and measuring what's left.

use super::geometry::Rect;
use super::vector::Vec2;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Unit normal pointing from the rectangle toward the ball centre.
    /// Zero when the centre sits on or inside the rectangle.
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
        }
    }
}

/// Check a ball at `ball_pos` against a rectangle
///
/// A hit is any overlap strictly closer than the radius. When the centre is
/// inside the rectangle the delta is zero and so is the normal; callers get
/// a damped bounce with no push-out rather than a division by zero.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f64, rect: &Rect) -> CollisionResult {
    let nearest = rect.clamp_point(ball_pos);
    let delta = ball_pos - nearest;

    if delta.length() < ball_radius {
        return CollisionResult {
            hit: true,
            normal: delta.normalize_or_zero(),
        };
    }

    CollisionResult::miss()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
