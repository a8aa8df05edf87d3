//! Simulation settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: u32,
    pub arena_height: u32,
    /// Period of the external tick timer
    pub tick_ms: u64,

    // === Balls ===
    pub ball_count: usize,
    /// Diameter of the unscaled ball sprite (pixels)
    pub ball_diameter: u32,
    pub density: f64,
    pub gravity: f64,
    /// Cosmetic rotation per tick (degrees)
    pub spin: f64,

    // === Run ===
    /// Seed for ball placement
    pub seed: u64,
    /// Number of ticks a headless run lasts
    pub ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tick_ms: TICK_MS,

            ball_count: BALL_COUNT,
            ball_diameter: BALL_DIAMETER,
            density: DENSITY,
            gravity: BALL_GRAVITY,
            spin: BALL_SPIN,

            seed: 0x5eed,
            ticks: 400,
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    /// Parse settings from JSON, `None` if malformed
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                log::warn!("Malformed settings in {}, using defaults", path.display());
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}, using defaults", path.display());
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "ball_count": 7, "gravity": 0.0 }"#)
            .expect("valid settings");
        assert_eq!(settings.ball_count, 7);
        assert_eq!(settings.gravity, 0.0);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.density, DENSITY);
    }

    #[test]
    fn test_malformed_json() {
        assert!(Settings::from_json("{ ball_count: ").is_none());
        assert!(Settings::from_json(r#"{ "ball_count": "many" }"#).is_none());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/bouncing-balls.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_arena() {
        let arena = Settings::default().arena();
        assert_eq!((arena.width, arena.height), (640, 480));
    }
}
