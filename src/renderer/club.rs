//! The putter
//!
//! Drawn while aiming. The grip hangs above the ball; at rest the head sits
//! just beside the ball, and during a drag it follows the pointer across the
//! court, rising as it swings further back.

use std::f64::consts::FRAC_PI_2;

use super::shapes::{line, quad};
use super::vertex::{Vertex, colors};
use crate::projection::IsoProjection;
use crate::sim::Vec2;

/// Hands sit this far above the ball (pixels)
const HANDS_HEIGHT: f64 = 60.0;
/// Head lift per world unit of backswing
const BACKSWING_LIFT: f64 = 0.4;
const MAX_HEAD_LIFT: f64 = 40.0;
/// Head offset from the ball at rest (world units)
const REST_OFFSET: Vec2 = Vec2::new(5.0, 5.0);
const SHAFT_WIDTH: f64 = 3.0;

/// Head outline in head-local pixels, fanned from the first point
const HEAD: [Vec2; 5] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(4.0, 0.0),
    Vec2::new(8.0, 12.0),
    Vec2::new(-6.0, 12.0),
    Vec2::new(-2.0, 0.0),
];
const STRIPE: [Vec2; 4] = [
    Vec2::new(-4.0, 9.0),
    Vec2::new(4.0, 9.0),
    Vec2::new(4.0, 10.0),
    Vec2::new(-4.0, 10.0),
];

/// Screen positions of the grip and the head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubPose {
    pub hands: Vec2,
    pub head: Vec2,
}

/// Where the club is for a ball at `ball` (world) and an optional pointer
/// position (screen) while dragging
pub fn club_pose(proj: &IsoProjection, ball: Vec2, pointer: Option<Vec2>) -> ClubPose {
    let hands = proj.world_to_screen(ball) - Vec2::new(0.0, HANDS_HEIGHT);

    let head = match pointer {
        Some(pointer) => {
            let world = proj.screen_to_world(pointer);
            let lift = (world.distance(ball) * BACKSWING_LIFT).min(MAX_HEAD_LIFT);
            proj.world_to_screen(world) - Vec2::new(0.0, lift)
        }
        None => proj.world_to_screen(ball + REST_OFFSET),
    };

    ClubPose { hands, head }
}

/// Shaft, head and stripe as one triangle list
pub fn club(pose: ClubPose) -> Vec<Vertex> {
    let shaft = pose.hands - pose.head;
    // Head-local +y runs along the shaft toward the grip
    let rotation = Vec2::from_angle(shaft.y.atan2(shaft.x) - FRAC_PI_2);
    let place = |p: Vec2| pose.head + rotation.rotate(p);

    let mut vertices = Vec::with_capacity(21);
    vertices.extend(line(pose.hands, pose.head, SHAFT_WIDTH, colors::CLUB_SHAFT));

    let head = HEAD.map(place);
    for i in 1..head.len() - 1 {
        vertices.push(Vertex::new(head[0].x as f32, head[0].y as f32, colors::CLUB_HEAD));
        vertices.push(Vertex::new(head[i].x as f32, head[i].y as f32, colors::CLUB_HEAD));
        vertices.push(Vertex::new(
            head[i + 1].x as f32,
            head[i + 1].y as f32,
            colors::CLUB_HEAD,
        ));
    }

    vertices.extend(quad(STRIPE.map(place), colors::CLUB_STRIPE));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose() {
        let proj = IsoProjection::default();
        let ball = Vec2::new(100.0, 400.0);
        let pose = club_pose(&proj, ball, None);

        // Ball projects to (110, 325)
        assert_eq!(pose.hands, Vec2::new(110.0, 265.0));
        assert_eq!(pose.head, proj.world_to_screen(Vec2::new(105.0, 405.0)));
    }

    #[test]
    fn test_head_follows_pointer() {
        let proj = IsoProjection::default();
        let ball = Vec2::new(100.0, 400.0);
        // Pointer 50 world units behind the ball: lift 20
        let pointer = proj.world_to_screen(Vec2::new(100.0, 450.0));
        let pose = club_pose(&proj, ball, Some(pointer));

        assert!((pose.head - (pointer - Vec2::new(0.0, 20.0))).length() < 1e-9);
        assert_eq!(pose.hands, Vec2::new(110.0, 265.0));
    }

    #[test]
    fn test_head_lift_is_capped() {
        let proj = IsoProjection::default();
        let ball = Vec2::new(100.0, 400.0);
        let pointer = proj.world_to_screen(Vec2::new(100.0, 700.0));
        let pose = club_pose(&proj, ball, Some(pointer));

        assert!((pose.head - (pointer - Vec2::new(0.0, 40.0))).length() < 1e-9);
    }

    #[test]
    fn test_club_vertices() {
        let pose = ClubPose {
            hands: Vec2::new(100.0, 40.0),
            head: Vec2::new(100.0, 100.0),
        };
        let verts = club(pose);
        assert_eq!(verts.len(), 21);
        assert_eq!(verts[6].color, colors::CLUB_HEAD);
        // Shaft straight up: the head outline extends up the shaft
        assert_eq!(verts[6].position, [100.0, 100.0]);
        assert!(verts[8].position[1] < 100.0);
        assert_eq!(verts[20].color, colors::CLUB_STRIPE);
    }
}
