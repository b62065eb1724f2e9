//! Axis-aligned rectangles in world space

use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// An axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Nearest point of the rectangle to `p`
    ///
    /// Uses max/min rather than `clamp` so a negative-size rect degrades
    /// instead of panicking.
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.x.max(p.x.min(self.x + self.w)),
            self.y.max(p.y.min(self.y + self.h)),
        )
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x, self.y + self.h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(r.clamp_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(r.clamp_point(Vec2::new(15.0, 25.0)), Vec2::new(10.0, 20.0));
        // Inside points map to themselves
        assert_eq!(r.clamp_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_zero_size_rect() {
        let r = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(r.clamp_point(Vec2::new(100.0, -100.0)), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_json_field_names() {
        let r: Rect = serde_json::from_str(r#"{"x":1,"y":2,"w":3,"h":4}"#).unwrap();
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
