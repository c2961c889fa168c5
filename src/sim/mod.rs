//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed inputs in, corrected state out
//! - Stable cell iteration order (row-major)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{ScanRegion, resolve_movement};
pub use grid::{GridError, Tile, TileGrid};
pub use state::{Disc, WorldState};
pub use tick::{FrameInput, tick};
