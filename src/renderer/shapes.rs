//! Shape generation for 2D primitives
//!
//! Inputs are screen-space points (already projected); outputs are triangle
//! lists.

use std::f64::consts::PI;

use super::vertex::Vertex;
use crate::projection::IsoProjection;
use crate::sim::{Rect, Vec2};

#[inline]
fn vertex(p: Vec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x as f32, p.y as f32, color)
}

/// Two triangles covering a convex quad given in winding order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        vertex(a, color),
        vertex(b, color),
        vertex(c, color),
        vertex(a, color),
        vertex(c, color),
        vertex(d, color),
    ]
}

/// A flat world rectangle on the court, raised by `lift` pixels
pub fn iso_rect(proj: &IsoProjection, rect: &Rect, lift: f64, color: [f32; 4]) -> Vec<Vertex> {
    quad(proj.rect_corners(rect, lift), color).to_vec()
}

/// A raised block: the two camera-facing sides hang `depth` pixels below
/// the top face
pub fn iso_box(
    proj: &IsoProjection,
    rect: &Rect,
    lift: f64,
    depth: f64,
    top_color: [f32; 4],
    side_color: [f32; 4],
) -> Vec<Vertex> {
    let [c0, c1, c2, c3] = proj.rect_corners(rect, lift);
    let down = Vec2::new(0.0, depth);

    let mut vertices = Vec::with_capacity(18);
    vertices.extend(quad([c1, c2, c2 + down, c1 + down], side_color));
    vertices.extend(quad([c2, c3, c3 + down, c2 + down], side_color));
    vertices.extend(quad([c0, c1, c2, c3], top_color));
    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, rx: f64, ry: f64, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f64 / segments as f64) * 2.0 * PI;
        let theta2 = ((i + 1) as f64 / segments as f64) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(vertex(center, color));
        vertices.push(vertex(
            center + Vec2::new(rx * theta1.cos(), ry * theta1.sin()),
            color,
        ));
        vertices.push(vertex(
            center + Vec2::new(rx * theta2.cos(), ry * theta2.sin()),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f64, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, radius, radius, color, segments)
}

/// A straight line `width` pixels wide
pub fn line(from: Vec2, to: Vec2, width: f64, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad([from + perp, to + perp, to - perp, from - perp], color)
}

/// Green at no power through yellow to red at full power
pub fn power_color(ratio: f64) -> [f32; 4] {
    let hue = 120.0 * (1.0 - ratio.clamp(0.0, 1.0));
    let (r, g) = if hue >= 60.0 {
        ((120.0 - hue) / 60.0, 1.0)
    } else {
        (1.0, hue / 60.0)
    };
    [r as f32, g as f32, 0.0, 1.0]
}
