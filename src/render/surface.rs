//! Fixed-resolution surface presentation
//!
//! The demo renders to a fixed-size surface which the host scales into its
//! window, preserving aspect ratio and centering the leftover as letterbox or
//! pillarbox bars.

use glam::Vec2;

/// How to place the scaled surface inside the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFit {
    /// Uniform scale applied to the surface
    pub scale: f32,
    /// Scaled surface size in window pixels
    pub size: Vec2,
    /// Bar size on each side (x: left/right, y: top/bottom)
    pub margin: Vec2,
}

impl SurfaceFit {
    /// Fit a `surface_w` x `surface_h` surface into a `screen_w` x `screen_h`
    /// window.
    pub fn compute(surface_w: f32, surface_h: f32, screen_w: f32, screen_h: f32) -> Self {
        let screen_ratio = screen_w / screen_h;
        let surface_ratio = surface_w / surface_h;

        let scale = if screen_ratio > surface_ratio {
            screen_h / surface_h
        } else {
            screen_w / surface_w
        };

        let size = Vec2::new(surface_w * scale, surface_h * scale);
        let margin = (Vec2::new(screen_w, screen_h) - size) / 2.0;

        Self { scale, size, margin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_has_no_bars() {
        let fit = SurfaceFit::compute(640.0, 480.0, 1280.0, 960.0);
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.size, Vec2::new(1280.0, 960.0));
        assert_eq!(fit.margin, Vec2::ZERO);
    }

    #[test]
    fn test_wide_window_gets_pillarbox() {
        let fit = SurfaceFit::compute(640.0, 480.0, 1280.0, 480.0);
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.margin, Vec2::new(320.0, 0.0));
    }

    #[test]
    fn test_tall_window_gets_letterbox() {
        let fit = SurfaceFit::compute(640.0, 480.0, 640.0, 960.0);
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.margin, Vec2::new(0.0, 240.0));
    }
}
