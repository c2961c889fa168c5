//! Gridwalk - a circle-vs-tilemap collision demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile grid, collision resolution, frame driver)
//! - `render`: CPU-side render description for a host renderer
//! - `settings`: Overlay and presentation preferences

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, the host's target frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Disc defaults
    pub const DISC_RADIUS: f32 = 0.5;
    pub const DISC_SPAWN: Vec2 = Vec2::new(3.0, 3.0);

    /// Movement speed in cells per second
    pub const BASE_SPEED: f32 = 2.0;
    /// Movement speed with the fast modifier held
    pub const FAST_SPEED: f32 = 5.0;

    /// Camera defaults
    pub const CAMERA_ZOOM: f32 = 20.0;
    pub const CAMERA_ZOOM_MIN: f32 = 1.0;
    pub const CAMERA_ZOOM_MAX: f32 = 100.0;
    /// Zoom change per wheel notch (fraction of current zoom)
    pub const CAMERA_ZOOM_STEP: f32 = 0.2;
    /// Follow-mode smoothing rate, per second
    pub const CAMERA_FOLLOW_RATE: f32 = 4.0;
    /// Return-to-origin smoothing rate when follow is off, per second
    pub const CAMERA_RETURN_RATE: f32 = 10.0;
    /// View-centering offset subtracted from the followed position
    /// (half the surface extent in cells at the default zoom, less half a cell)
    pub const CAMERA_FOLLOW_OFFSET: Vec2 = Vec2::new(15.5, 12.0);

    /// Fixed-resolution application surface, presented letterboxed
    pub const SURFACE_WIDTH: u32 = 640;
    pub const SURFACE_HEIGHT: u32 = 480;
}
