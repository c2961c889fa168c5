//! Simulation state
//!
//! Everything the frame driver mutates lives in [`WorldState`] and is passed
//! explicitly; there is no process-wide state.

use glam::Vec2;

use super::camera::Camera;
use super::collision::ScanRegion;
use super::grid::TileGrid;
use crate::consts::*;

/// The moving circular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    /// Center position in cell units
    pub pos: Vec2,
    /// Velocity in cells per second
    pub vel: Vec2,
    /// Radius in cell units, constant over the disc's lifetime
    pub radius: f32,
}

impl Disc {
    pub fn spawn() -> Self {
        Self {
            pos: DISC_SPAWN,
            vel: Vec2::ZERO,
            radius: DISC_RADIUS,
        }
    }
}

/// Complete state of one scenario
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Static obstacle grid, immutable during simulation
    pub grid: TileGrid,
    pub disc: Disc,
    pub camera: Camera,
    /// Cells tested for collision last frame, kept for the debug overlay
    pub scan_region: ScanRegion,
    /// Elapsed simulated time in seconds
    pub time_secs: f64,
}

impl WorldState {
    pub fn new(grid: TileGrid) -> Self {
        let disc = Disc::spawn();
        Self {
            grid,
            disc,
            camera: Camera::default(),
            scan_region: ScanRegion::around_motion(disc.pos, disc.pos),
            time_secs: 0.0,
        }
    }

    /// Restore the scenario start: disc at spawn, camera pose reset.
    ///
    /// The grid and elapsed time are untouched, and the follow toggle keeps
    /// its state.
    pub fn reset(&mut self) {
        self.disc = Disc::spawn();
        self.scan_region = ScanRegion::around_motion(self.disc.pos, self.disc.pos);
        self.camera.reset();
    }
}
