//! Scene assembly
//!
//! Turns a [`WorldState`] into one triangle list per frame: solid tiles, the
//! optional scan-region overlay, the disc, and its velocity vector.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::WorldState;

/// Line width for tile edges and the velocity vector, in cell units
const LINE_WIDTH: f32 = 0.05;
/// Triangle-fan resolution for the disc
const DISC_SEGMENTS: u32 = 32;

/// Vertices for one frame, in draw order
pub fn build_scene(state: &WorldState, settings: &Settings) -> Vec<Vertex> {
    let mut out = Vec::new();

    for cell in state.grid.solid_cells() {
        tile_outline(&mut out, cell.as_vec2());
    }

    if settings.show_scan_region {
        let min = state.scan_region.min.as_vec2();
        let max = state.scan_region.max.as_vec2() + Vec2::ONE;
        shapes::rect_fill(&mut out, min, max, colors::SCAN_REGION);
    }

    shapes::circle(
        &mut out,
        state.disc.pos,
        state.disc.radius,
        colors::DISC,
        DISC_SEGMENTS,
    );

    if settings.show_velocity && state.disc.vel.length_squared() > 0.0 {
        let tip = state.disc.pos + state.disc.vel.normalize() * state.disc.radius;
        shapes::line(&mut out, state.disc.pos, tip, LINE_WIDTH, colors::VELOCITY);
    }

    out
}

/// Unit-square outline with cross bracing, the demo's tile look
fn tile_outline(out: &mut Vec<Vertex>, min: Vec2) {
    let top_right = min + Vec2::new(1.0, 0.0);
    let bottom_left = min + Vec2::new(0.0, 1.0);
    let bottom_right = min + Vec2::ONE;

    shapes::line(out, min, top_right, LINE_WIDTH, colors::TILE_EDGE);
    shapes::line(out, min, bottom_left, LINE_WIDTH, colors::TILE_EDGE);
    shapes::line(out, bottom_left, bottom_right, LINE_WIDTH, colors::TILE_EDGE);
    shapes::line(out, top_right, bottom_right, LINE_WIDTH, colors::TILE_EDGE);
    shapes::line(out, min, bottom_right, LINE_WIDTH, colors::TILE_EDGE);
    shapes::line(out, bottom_left, top_right, LINE_WIDTH, colors::TILE_EDGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TileGrid;

    /// Six lines of six vertices each per solid tile
    const TILE_VERTS: usize = 36;
    const DISC_VERTS: usize = (DISC_SEGMENTS * 3) as usize;

    fn world_with_two_tiles() -> WorldState {
        let grid = TileGrid::from_ascii(3, 3, concat!("#..", "...", "..#")).unwrap();
        WorldState::new(grid)
    }

    #[test]
    fn test_scene_vertex_accounting() {
        let world = world_with_two_tiles();
        let settings = Settings::default();

        // Stationary disc: tiles + overlay + disc, no velocity vector
        let scene = build_scene(&world, &settings);
        assert_eq!(scene.len(), 2 * TILE_VERTS + 6 + DISC_VERTS);
    }

    #[test]
    fn test_overlay_toggles_off() {
        let world = world_with_two_tiles();
        let settings = Settings {
            show_scan_region: false,
            ..Settings::default()
        };
        let scene = build_scene(&world, &settings);
        assert_eq!(scene.len(), 2 * TILE_VERTS + DISC_VERTS);
    }

    #[test]
    fn test_velocity_vector_only_when_moving() {
        let mut world = world_with_two_tiles();
        let settings = Settings::default();

        world.disc.vel = Vec2::new(1.0, 0.0);
        let moving = build_scene(&world, &settings);
        world.disc.vel = Vec2::ZERO;
        let still = build_scene(&world, &settings);

        assert_eq!(moving.len(), still.len() + 6);
    }
}
