//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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
}

/// Colors for demo elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.18, 0.45, 1.0];
    pub const TILE_EDGE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const DISC: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const VELOCITY: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    /// Translucent cyan wash over the cells scanned this frame
    pub const SCAN_REGION: [f32; 4] = [0.0, 1.0, 1.0, 0.2];
}
