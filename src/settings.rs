//! Demo settings and preferences
//!
//! Persisted as a small JSON file; losing or corrupting it only costs the
//! user their toggles, so load falls back to defaults instead of failing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Overlay and presentation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the translucent overlay over the cells scanned this frame
    pub show_scan_region: bool,
    /// Draw the velocity vector on the disc
    pub show_velocity: bool,
    /// Integer scale applied to the fixed-resolution surface for the window
    pub window_scale: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_scan_region: true,
            show_velocity: true,
            window_scale: 2,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to `path`. Failures are logged, not fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => log::warn!("Failed to save settings: {err}"),
            },
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
