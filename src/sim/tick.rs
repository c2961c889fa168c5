//! Per-frame driver
//!
//! Thin orchestration over the pure pieces: read input, form a desired
//! velocity, run the collision resolver, store the corrected position.

use glam::Vec2;

use super::collision::{ScanRegion, resolve_in_region};
use super::state::WorldState;
use crate::consts::*;

/// Host input for a single frame
///
/// The directional and `fast` fields mirror currently-held key state;
/// `reset` and `toggle_follow` are one-shot key edges the host clears after
/// the frame is processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fast-move modifier held
    pub fast: bool,
    /// Restart the scenario
    pub reset: bool,
    /// Toggle the follow camera
    pub toggle_follow: bool,
    /// Mouse wheel movement this frame
    pub wheel: f32,
    /// Mouse drag delta while the pan button is held, in screen pixels
    pub drag: Vec2,
}

impl FrameInput {
    /// Desired direction from held keys, unnormalized
    fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut WorldState, input: &FrameInput, dt: f32) {
    state.time_secs += dt as f64;

    if input.toggle_follow {
        state.camera.follow = !state.camera.follow;
    }
    state.camera.update(state.disc.pos, dt);
    state.camera.apply_wheel(input.wheel);
    if input.drag != Vec2::ZERO {
        state.camera.pan(input.drag);
    }

    // Desired velocity from held keys, normalized so diagonals aren't faster
    let dir = input.direction();
    state.disc.vel = if dir.length_squared() > 0.0 {
        dir.normalize() * if input.fast { FAST_SPEED } else { BASE_SPEED }
    } else {
        Vec2::ZERO
    };

    // Where would the disc be if nothing were in the way?
    let tentative = state.disc.pos + state.disc.vel * dt;

    let region = ScanRegion::around_motion(state.disc.pos, tentative);
    state.scan_region = region;
    state.disc.pos = resolve_in_region(&state.grid, region, tentative, state.disc.radius);

    if input.reset {
        state.reset();
    }
}
