//! Collision resolution against the tile grid
//!
//! The core of the demo: given where the disc is and where its velocity wants
//! to take it this frame, compute the closest position it may actually occupy
//! without penetrating any solid cell. Each candidate cell is tested with a
//! nearest-point projection, and penetrations are resolved statically by
//! pushing the disc out along the separation direction.

use glam::{IVec2, Vec2};

use super::grid::TileGrid;

/// Inclusive range of grid cells examined for collision in one frame
///
/// Covers the cells touched by the motion's bounding box plus a one-cell ring,
/// so any solid cell the disc could reach in a sub-cell step is included. The
/// ring does not scale with displacement: a step of more than one cell per
/// frame can tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRegion {
    pub min: IVec2,
    pub max: IVec2,
}

impl ScanRegion {
    /// Region around a single frame of motion from `current` to `tentative`.
    ///
    /// The current cell is the floor cell; the target cell truncates toward
    /// zero, which coincides with the floor cell everywhere the map is
    /// non-negative.
    pub fn around_motion(current: Vec2, tentative: Vec2) -> Self {
        let current_cell = current.floor().as_ivec2();
        let target_cell = tentative.as_ivec2();
        Self {
            min: current_cell.min(target_cell) - IVec2::ONE,
            max: current_cell.max(target_cell) + IVec2::ONE,
        }
    }

    /// All cells in the region, row-major (y outer, x inner)
    pub fn cells(self) -> impl Iterator<Item = IVec2> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| IVec2::new(x, y)))
    }
}

/// Resolve one frame of motion against the grid.
///
/// Returns the position closest to `tentative` that the disc may occupy this
/// frame. `tentative` is normally `current + velocity * dt`.
pub fn resolve_movement(grid: &TileGrid, current: Vec2, tentative: Vec2, radius: f32) -> Vec2 {
    resolve_in_region(
        grid,
        ScanRegion::around_motion(current, tentative),
        tentative,
        radius,
    )
}

/// Resolve against an explicit scan region.
///
/// The frame driver computes the region once and also hands it to the host
/// for the debug overlay.
pub fn resolve_in_region(
    grid: &TileGrid,
    region: ScanRegion,
    tentative: Vec2,
    radius: f32,
) -> Vec2 {
    let mut corrected = tentative;

    for cell in region.cells() {
        if !grid.is_solid(cell.x, cell.y) {
            continue;
        }

        // Nearest point to the disc center on (or in) the cell's unit square
        let cell_min = cell.as_vec2();
        let nearest = corrected.clamp(cell_min, cell_min + Vec2::ONE);

        let to_nearest = nearest - corrected;
        let mut overlap = radius - to_nearest.length();
        if !overlap.is_finite() {
            overlap = 0.0;
        }

        // Push the disc out along the separation direction. The correction is
        // applied in place, so later cells in the same pass test against the
        // already-corrected position (single-pass, order-dependent static
        // resolution). A zero-length separation has no defined direction and
        // contributes no correction.
        if overlap > 0.0 {
            corrected -= to_nearest.normalize_or_zero() * overlap;
        }
    }

    corrected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 4x4 map, solid border, empty 2x2 interior
    fn bordered_4x4() -> TileGrid {
        TileGrid::from_ascii(4, 4, concat!("####", "#..#", "#..#", "####")).unwrap()
    }

    /// 3x3 map with only the center cell solid
    fn lone_block_3x3() -> TileGrid {
        TileGrid::from_ascii(3, 3, concat!("...", ".#.", "...")).unwrap()
    }

    #[test]
    fn test_no_false_correction() {
        let grid = bordered_4x4();
        // Interior center, a full cell away from every wall
        let tentative = Vec2::new(2.1, 2.0);
        let corrected = resolve_movement(&grid, Vec2::new(2.0, 2.0), tentative, 0.4);
        assert_eq!(corrected, tentative);
    }

    #[test]
    fn test_minimal_correction_distance() {
        let grid = lone_block_3x3();
        // Moving right into the block's left face
        let corrected = resolve_movement(&grid, Vec2::new(0.5, 1.5), Vec2::new(0.8, 1.5), 0.5);

        assert!((corrected.x - 0.5).abs() < 1e-6);
        assert!((corrected.y - 1.5).abs() < 1e-6);
        // Exactly radius away from the nearest boundary point
        let nearest = Vec2::new(1.0, 1.5);
        assert!((corrected.distance(nearest) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_idempotent_once_resolved() {
        let grid = lone_block_3x3();
        let corrected = resolve_movement(&grid, Vec2::new(0.5, 1.5), Vec2::new(0.8, 1.5), 0.5);
        let again = resolve_movement(&grid, corrected, corrected, 0.5);
        assert_eq!(again, corrected);
    }

    #[test]
    fn test_degenerate_center_at_cell_corner() {
        let grid = lone_block_3x3();
        // Center exactly on the block's corner: separation direction is
        // undefined, so no correction is applied and nothing goes NaN
        let tentative = Vec2::new(1.0, 1.0);
        let corrected = resolve_movement(&grid, tentative, tentative, 0.5);
        assert!(corrected.x.is_finite() && corrected.y.is_finite());
        assert_eq!(corrected, tentative);
    }

    #[test]
    fn test_left_wall_clamps_to_radius() {
        let grid = bordered_4x4();
        // Heading left into the solid column ending at x = 1; the corrected
        // center must stay radius away from the wall plane
        let corrected = resolve_movement(&grid, Vec2::new(2.0, 1.5), Vec2::new(1.2, 1.5), 0.4);
        assert!((corrected.x - 1.4).abs() < 1e-6);
        assert!((corrected.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_scan_region_is_one_ring() {
        // Sub-cell diagonal step spanning two cells vertically
        let region = ScanRegion::around_motion(Vec2::new(2.3, 2.7), Vec2::new(2.9, 3.4));
        assert_eq!(region.min, IVec2::new(1, 1));
        assert_eq!(region.max, IVec2::new(3, 4));
        assert_eq!(region.cells().count(), 12);

        // No motion: 3x3 neighborhood of the current cell
        let still = ScanRegion::around_motion(Vec2::new(2.5, 2.5), Vec2::new(2.5, 2.5));
        assert_eq!(still.min, IVec2::new(1, 1));
        assert_eq!(still.max, IVec2::new(3, 3));
        assert_eq!(still.cells().count(), 9);
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let region = ScanRegion {
            min: IVec2::new(0, 0),
            max: IVec2::new(1, 1),
        };
        let cells: Vec<IVec2> = region.cells().collect();
        assert_eq!(
            cells,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_resolved_position_is_finite(
            cx in -2.0f32..6.0,
            cy in -2.0f32..6.0,
            tx in -2.0f32..6.0,
            ty in -2.0f32..6.0,
            radius in 0.05f32..0.75,
        ) {
            let grid = bordered_4x4();
            let corrected =
                resolve_movement(&grid, Vec2::new(cx, cy), Vec2::new(tx, ty), radius);
            prop_assert!(corrected.x.is_finite());
            prop_assert!(corrected.y.is_finite());
        }

        #[test]
        fn prop_clear_positions_pass_through(
            tx in 1.5f32..2.5,
            ty in 1.5f32..2.5,
        ) {
            // At radius 0.4, centers in [1.4, 2.6]^2 clear the border walls;
            // [1.5, 2.5]^2 keeps a margin on top of that
            let grid = bordered_4x4();
            let tentative = Vec2::new(tx, ty);
            let corrected = resolve_movement(&grid, tentative, tentative, 0.4);
            prop_assert_eq!(corrected, tentative);
        }
    }
}
