//! View smoothing and zoom control
//!
//! The camera is plain data the host applies when drawing; the simulation
//! only eases it toward its rest pose each frame.

use glam::Vec2;

use crate::consts::*;

/// 2D view transform for the host's draw pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space point the view is anchored to
    pub target: Vec2,
    /// Pan offset from dragging, in screen pixels
    pub offset: Vec2,
    /// Pixels per cell
    pub zoom: f32,
    /// Whether the view tracks the disc
    pub follow: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: CAMERA_ZOOM,
            follow: false,
        }
    }
}

impl Camera {
    /// Ease the view toward its rest pose for this frame.
    ///
    /// Following, the target moves toward `focus` minus the view-centering
    /// offset; otherwise it returns to the origin and any pan offset is
    /// dropped.
    pub fn update(&mut self, focus: Vec2, dt: f32) {
        if self.follow {
            let dest = focus - CAMERA_FOLLOW_OFFSET;
            self.target = self.target.lerp(dest, (CAMERA_FOLLOW_RATE * dt).min(1.0));
        } else if self.target != Vec2::ZERO {
            self.target = self.target.lerp(Vec2::ZERO, (CAMERA_RETURN_RATE * dt).min(1.0));
            self.offset = Vec2::ZERO;
        }
    }

    /// Apply one frame of mouse-wheel zoom, 20% per notch, clamped
    pub fn apply_wheel(&mut self, wheel: f32) {
        if wheel > 0.0 {
            self.zoom += self.zoom * CAMERA_ZOOM_STEP;
        } else if wheel < 0.0 {
            self.zoom -= self.zoom * CAMERA_ZOOM_STEP;
        }
        self.zoom = self.zoom.clamp(CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);
    }

    /// Pan by a mouse-drag delta in screen pixels
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Restore pose and zoom; the follow toggle is left as-is
    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
        self.offset = Vec2::ZERO;
        self.zoom = CAMERA_ZOOM;
    }
}
