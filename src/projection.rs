//! World <-> isometric screen projection
//!
//! World space is the flat court the physics runs in. Screen space is pixels
//! after a 2:1 isometric squash plus a fixed offset. The map is linear and
//! invertible, so both directions round-trip to floating-point precision.

use crate::sim::{Rect, Vec2};
use crate::tuning::Tuning;

/// Fixed isometric projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset: Vec2,
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::from(&Tuning::default())
    }
}

impl From<&Tuning> for IsoProjection {
    fn from(t: &Tuning) -> Self {
        Self {
            scale_x: t.iso_scale_x,
            scale_y: t.iso_scale_y,
            offset: Vec2::new(t.world_offset_x, t.world_offset_y),
        }
    }
}

impl IsoProjection {
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            (world.x - world.y) * self.scale_x + self.offset.x,
            (world.x + world.y) * self.scale_y + self.offset.y,
        )
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let x = (screen.x - self.offset.x) / self.scale_x;
        let y = (screen.y - self.offset.y) / self.scale_y;
        Vec2::new((y + x) / 2.0, (y - x) / 2.0)
    }

    /// Projected corners of a world rectangle, raised by `lift` pixels
    pub fn rect_corners(&self, rect: &Rect, lift: f64) -> [Vec2; 4] {
        rect.corners().map(|c| self.world_to_screen(c) - Vec2::new(0.0, lift))
    }

    /// On-screen radius for a world radius (ball, hole)
    #[inline]
    pub fn screen_radius(&self, world_radius: f64) -> f64 {
        world_radius * self.scale_x * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    #[test]
    fn test_known_points() {
        let proj = IsoProjection::default();
        assert_eq!(proj.world_to_screen(Vec2::ZERO), Vec2::new(260.0, 200.0));
        // Level start (100, 400)
        assert_eq!(
            proj.world_to_screen(Vec2::new(100.0, 400.0)),
            Vec2::new(110.0, 325.0)
        );
        assert_eq!(proj.screen_to_world(Vec2::new(110.0, 325.0)), Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_round_trip_thousand_points() {
        let proj = IsoProjection::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Vec2::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0));
            let back = proj.screen_to_world(proj.world_to_screen(p));
            assert!((back - p).length() < 1e-9, "{:?} -> {:?}", p, back);
        }
    }

    #[test]
    fn test_rect_corners_lift() {
        let proj = IsoProjection::default();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = proj.rect_corners(&rect, 0.0);
        let raised = proj.rect_corners(&rect, 5.0);
        for (f, r) in flat.iter().zip(raised.iter()) {
            assert_eq!(f.x, r.x);
            assert_eq!(f.y - 5.0, r.y);
        }
        assert_eq!(flat[0], Vec2::new(260.0, 200.0));
        assert_eq!(flat[1], Vec2::new(265.0, 202.5));
    }

    #[test]
    fn test_screen_radius() {
        assert_eq!(IsoProjection::default().screen_radius(6.0), 6.0);
    }

    proptest! {
        #[test]
        fn prop_world_screen_world(x in -5000.0f64..5000.0, y in -5000.0f64..5000.0) {
            let proj = IsoProjection::default();
            let p = Vec2::new(x, y);
            let back = proj.screen_to_world(proj.world_to_screen(p));
            prop_assert!((back - p).length() < 1e-9);
        }

        #[test]
        fn prop_screen_world_screen(x in -2000.0f64..2000.0, y in -2000.0f64..2000.0) {
            let proj = IsoProjection::default();
            let p = Vec2::new(x, y);
            let back = proj.world_to_screen(proj.screen_to_world(p));
            prop_assert!((back - p).length() < 1e-9);
        }
    }
}
