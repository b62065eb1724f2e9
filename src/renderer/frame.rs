//! Per-frame draw list
//!
//! Turns the game's state into one screen-space triangle list, back to front.
//! The game never draws; a backend uploads these vertices however it likes.

use super::club::{club, club_pose};
use super::shapes::{circle, ellipse, iso_box, iso_rect, line, power_color, quad};
use super::vertex::{Vertex, colors};
use crate::game::Game;
use crate::sim::{GamePhase, Rect, Vec2};

/// Checkerboard tile size (world units)
const TILE_SIZE: f64 = 20.0;
/// Wall side faces hang this far below the top face (pixels)
const WALL_DEPTH: f64 = 10.0;
/// Walls and obstacles sit this far above the floor (pixels)
const BLOCK_LIFT: f64 = 1.0;
/// Ball is drawn raised above its shadow
const BALL_LIFT: f64 = 4.0;
const SEGMENTS: u32 = 24;
const CLOUD_SEGMENTS: u32 = 16;

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

/// Bounding box of all walls, i.e. the court
fn court_bounds(walls: &[Rect]) -> Option<Rect> {
    let first = walls.first()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x + first.w, first.y + first.h);
    for w in &walls[1..] {
        min_x = min_x.min(w.x);
        min_y = min_y.min(w.y);
        max_x = max_x.max(w.x + w.w);
        max_y = max_y.max(w.y + w.h);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Build the draw list for the current state of `game`
pub fn build_frame(game: &Game) -> DrawList {
    let proj = game.projection();
    let level = game.level();
    let mut vertices = Vec::new();

    // Sky: a main puff with two smaller ones either side
    for cloud in game.clouds().clouds() {
        let mut color = colors::CLOUD;
        color[3] = cloud.opacity as f32;
        let (c, s) = (Vec2::new(cloud.x, cloud.y), cloud.size);
        vertices.extend(circle(c, s, color, CLOUD_SEGMENTS));
        for side in [-1.0, 1.0] {
            let puff = c + Vec2::new(side * s * 0.8, s * 0.3);
            vertices.extend(circle(puff, s * 0.7, color, CLOUD_SEGMENTS));
        }
    }

    // Floor
    if let Some(court) = court_bounds(&level.walls) {
        let cols = (court.w / TILE_SIZE).ceil() as i64;
        let rows = (court.h / TILE_SIZE).ceil() as i64;
        for col in 0..cols {
            for row in 0..rows {
                let tile = Rect::new(
                    court.x + col as f64 * TILE_SIZE,
                    court.y + row as f64 * TILE_SIZE,
                    TILE_SIZE,
                    TILE_SIZE,
                );
                let color = if (col + row) % 2 == 0 {
                    colors::FLOOR
                } else {
                    colors::FLOOR_DARK
                };
                vertices.extend(iso_rect(proj, &tile, 0.0, color));
            }
        }
    }

    for wall in level.walls.iter() {
        vertices.extend(iso_box(
            proj,
            wall,
            BLOCK_LIFT,
            WALL_DEPTH,
            colors::WALL_TOP,
            colors::WALL_SIDE,
        ));
    }

    // Hole
    let hole = proj.world_to_screen(level.hole);
    let hole_r = proj.screen_radius(game.tuning().hole_radius);
    vertices.extend(ellipse(hole, hole_r, hole_r * 0.6, colors::HOLE, SEGMENTS));

    for obstacle in &level.obstacles {
        vertices.extend(iso_rect(proj, &obstacle.rect, BLOCK_LIFT, colors::OBSTACLE));
    }

    // Ball and its shadow
    let ball = game.ball();
    let ball_screen = proj.world_to_screen(ball.pos);
    if ball.active {
        let r = proj.screen_radius(ball.radius);
        vertices.extend(ellipse(
            ball_screen + Vec2::new(0.0, 2.0),
            r,
            r * 0.6,
            colors::BALL_SHADOW,
            SEGMENTS,
        ));
        vertices.extend(circle(
            ball_screen - Vec2::new(0.0, BALL_LIFT),
            r,
            colors::BALL,
            SEGMENTS,
        ));
    }

    for p in game.confetti().particles() {
        let mut color = p.color;
        color[3] = p.life.clamp(0.0, 1.0) as f32;
        let corners = [
            p.pos,
            p.pos + Vec2::new(p.size, 0.0),
            p.pos + Vec2::new(p.size, p.size),
            p.pos + Vec2::new(0.0, p.size),
        ];
        vertices.extend(quad(corners, color));
    }

    // Aim guide and shot line while dragging, then the club
    if game.phase() == GamePhase::Aiming {
        let aim = game.aim_preview();
        if let Some(aim) = aim {
            vertices.extend(line(ball_screen, aim.current, 1.0, colors::DRAG_GUIDE));
            vertices.extend(line(
                ball_screen,
                ball_screen - aim.drag,
                3.0,
                power_color(aim.power_ratio),
            ));
        }
        let pose = club_pose(proj, ball.pos, aim.map(|a| a.pointer));
        vertices.extend(club(pose));
    }

    DrawList {
        clear_color: colors::BACKGROUND,
        vertices,
    }
}
