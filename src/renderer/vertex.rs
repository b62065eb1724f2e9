//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte view of a vertex list, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const FLOOR: [f32; 4] = [0.298, 0.686, 0.314, 1.0];
    pub const FLOOR_DARK: [f32; 4] = [0.220, 0.557, 0.235, 1.0];
    pub const WALL_SIDE: [f32; 4] = [0.553, 0.431, 0.388, 1.0];
    pub const WALL_TOP: [f32; 4] = [0.631, 0.533, 0.498, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.957, 0.263, 0.212, 1.0];
    pub const HOLE: [f32; 4] = [0.129, 0.129, 0.129, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
    pub const DRAG_GUIDE: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const CLUB_SHAFT: [f32; 4] = [0.690, 0.745, 0.773, 1.0];
    pub const CLUB_HEAD: [f32; 4] = [0.271, 0.353, 0.392, 1.0];
    pub const CLUB_STRIPE: [f32; 4] = [0.471, 0.565, 0.612, 1.0];
    /// Opacity comes from each cloud
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
