//! Static tile grid
//!
//! The world is a fixed-size, row-major grid of unit cells. Cells are either
//! solid (a one-by-one obstacle in world units) or empty. The grid never
//! changes during simulation.

use glam::IVec2;

/// Byte marking a solid cell in an ASCII map buffer
pub const SOLID_MARKER: u8 = b'#';

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
}

impl Tile {
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Solid)
    }
}

/// Errors from grid construction
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("map buffer holds {len} cells but dimensions are {width}x{height} ({expected} cells)")]
    DimensionMismatch {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },
}

/// A fixed grid of solid/empty cells in world units
///
/// Cell (x, y) occupies the world-space square `[x, x+1] x [y, y+1]`.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Parse a grid from a flattened row-major buffer, one byte per cell.
    ///
    /// [`SOLID_MARKER`] denotes a solid cell; any other byte is empty. The
    /// buffer length must equal `width * height` exactly.
    pub fn from_ascii(width: u32, height: u32, map: &str) -> Result<Self, GridError> {
        let expected = (width as usize) * (height as usize);
        if map.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                len: map.len(),
                expected,
            });
        }

        let cells = map
            .bytes()
            .map(|b| if b == SOLID_MARKER { Tile::Solid } else { Tile::Empty })
            .collect();

        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether cell (x, y) blocks movement. Out-of-range cells are never solid.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize].is_solid()
    }

    /// Coordinates of every solid cell, row-major
    pub fn solid_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_solid())
            .map(|(i, _)| {
                IVec2::new(
                    (i % self.width as usize) as i32,
                    (i / self.width as usize) as i32,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_major() {
        // 3x2: solid at (0, 0) and (2, 1)
        let grid = TileGrid::from_ascii(3, 2, "#....#").unwrap();
        assert!(grid.is_solid(0, 0));
        assert!(grid.is_solid(2, 1));
        assert!(!grid.is_solid(1, 0));
        assert!(!grid.is_solid(2, 0));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = TileGrid::from_ascii(4, 4, "####").unwrap_err();
        match err {
            GridError::DimensionMismatch { len, expected, .. } => {
                assert_eq!(len, 4);
                assert_eq!(expected, 16);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_never_solid() {
        let grid = TileGrid::from_ascii(2, 2, "####").unwrap();
        assert!(!grid.is_solid(-1, 0));
        assert!(!grid.is_solid(0, -1));
        assert!(!grid.is_solid(2, 0));
        assert!(!grid.is_solid(0, 2));
        assert!(grid.is_solid(1, 1));
    }

    #[test]
    fn test_solid_cells_iteration() {
        let grid = TileGrid::from_ascii(3, 2, ".#.#.#").unwrap();
        let solids: Vec<IVec2> = grid.solid_cells().collect();
        assert_eq!(
            solids,
            vec![IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(2, 1)]
        );
    }
}
