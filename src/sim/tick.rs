//! Per-tick physics update
//!
//! Advances the court by one frame: moving walls, ball integration with wall
//! bounces and friction, then the hole's magnet and the win check. The step
//! order matters near boundaries and must not be rearranged.

use super::collision::{ball_rect_collision, reflect_velocity};
use super::geometry::Rect;
use super::state::{Ball, GamePhase, Level, TickEvent};
use super::vector::{Vec2, VecExt, VecPool};
use crate::tuning::Tuning;

/// Constants the engine reads every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub friction: f64,
    pub stop_threshold: f64,
    pub wall_bounce: f64,
    pub magnet_radius: f64,
    pub magnet_force: f64,
    pub magnet_engage_speed: f64,
    pub win_radius: f64,
}

impl From<&Tuning> for PhysicsParams {
    fn from(t: &Tuning) -> Self {
        Self {
            friction: t.friction,
            stop_threshold: t.stop_threshold,
            wall_bounce: t.wall_bounce,
            magnet_radius: t.magnet_radius,
            magnet_force: t.magnet_force,
            magnet_engage_speed: t.magnet_engage_speed,
            win_radius: t.win_radius,
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::from(&Tuning::default())
    }
}

/// The collision and motion engine
///
/// Owns its scratch storage so a warm engine doesn't allocate per tick.
#[derive(Debug, Default)]
pub struct Physics {
    params: PhysicsParams,
    pool: VecPool,
    collidables: Vec<Rect>,
}

impl Physics {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            params: PhysicsParams::from(tuning),
            pool: VecPool::new(),
            collidables: Vec::new(),
        }
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// Scratch vectors currently checked out (zero between ticks)
    pub fn pool_outstanding(&self) -> usize {
        self.pool.outstanding()
    }

    /// Advance one tick
    ///
    /// Moving walls always advance. The ball only integrates while `phase`
    /// is `Moving`; the magnet and win check run in any phase once the ball
    /// is active, so a resting ball in the hole reports `Won` every tick.
    pub fn update(
        &mut self,
        ball: &mut Ball,
        level: &mut Level,
        phase: GamePhase,
    ) -> Option<TickEvent> {
        // 1. Moving obstacles
        for obstacle in &mut level.obstacles {
            obstacle.advance();
        }

        // 2. Ball integration
        if phase == GamePhase::Moving && ball.active {
            self.integrate(ball, level);
        }

        // 3. Magnet and win check
        if ball.active {
            return self.settle_near_hole(ball, level.hole);
        }

        None
    }

    fn integrate(&mut self, ball: &mut Ball, level: &Level) {
        let p = self.params;

        let proposed = self.pool.acquire(ball.pos.x, ball.pos.y);
        *self.pool.get_mut(&proposed) += ball.vel;
        let next_pos = self.pool.get(&proposed);

        level.collect_collidables(&mut self.collidables);

        let mut did_collide = false;
        for rect in &self.collidables {
            let hit = ball_rect_collision(next_pos, ball.radius, rect);
            if !hit.hit {
                continue;
            }

            log::debug!(
                "Ball hit rect at ({}, {}) normal ({:.3}, {:.3})",
                rect.x,
                rect.y,
                hit.normal.x,
                hit.normal.y
            );

            ball.vel = reflect_velocity(ball.vel, hit.normal) * p.wall_bounce;
            // Fixed push along the normal, not proportional to penetration
            ball.pos += hit.normal;
            did_collide = true;
        }

        if !did_collide {
            ball.pos += ball.vel;
            ball.vel *= p.friction;
        }

        self.pool.release(proposed);

        if ball.speed() < p.stop_threshold {
            ball.vel.set(0.0, 0.0);
        }
    }

    fn settle_near_hole(&mut self, ball: &mut Ball, hole: Vec2) -> Option<TickEvent> {
        let p = self.params;
        let dist_to_hole = ball.pos.distance(hole);

        if dist_to_hole < p.magnet_radius && ball.speed() < p.magnet_engage_speed {
            let dir = self.pool.acquire(hole.x - ball.pos.x, hole.y - ball.pos.y);
            let pull = *self.pool.get_mut(&dir).normalize_in_place() * p.magnet_force;
            ball.vel += pull;
            self.pool.release(dir);
        }

        if dist_to_hole < p.win_radius {
            ball.vel.set(0.0, 0.0);
            ball.pos.copy_from(hole);
            return Some(TickEvent::Won);
        }

        None
    }
}
