//! Game tuning and track configuration
//!
//! The defaults carry the stock course: start boxes, finish placement,
//! per-image scale factors and the rival's lap path. A JSON file can
//! override any of it; a missing or malformed file falls back to the
//! defaults with a log line, never an error.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Motion constants for one car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarTuning {
    /// Cap on |velocity|, pixels per tick
    pub max_velocity: f32,
    /// Degrees turned per steering tick
    pub rotation_rate: f32,
    /// Velocity gained per pedal tick
    pub acceleration: f32,
}

/// Track geometry and asset parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub player_start: Vec2,
    pub rival_start: Vec2,
    /// Top-left placement of the finish sprite
    pub finish_position: Vec2,
    /// Scale factors applied to each sheet at load time
    pub grass_scale: f32,
    pub track_scale: f32,
    pub border_scale: f32,
    pub finish_scale: f32,
    pub car_scale: f32,
    /// The rival's lap in track coordinates
    pub path: Vec<Vec2>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            player_start: Vec2::new(130.0, 180.0),
            rival_start: Vec2::new(160.0, 180.0),
            finish_position: Vec2::new(120.0, 220.0),
            grass_scale: 2.2,
            track_scale: 0.8,
            border_scale: 0.8,
            finish_scale: 0.7,
            car_scale: 0.5,
            path: default_path(),
        }
    }
}

/// The stock lap around the track sheet
fn default_path() -> Vec<Vec2> {
    [
        (155.0, 86.0),
        (41.0, 129.0),
        (51.0, 412.0),
        (232.0, 614.0),
        (351.0, 600.0),
        (370.0, 466.0),
        (370.0, 466.0),
        (535.0, 473.0),
        (536.0, 612.0),
        (657.0, 619.0),
        (653.0, 330.0),
        (383.0, 327.0),
        (414.0, 224.0),
        (611.0, 221.0),
        (636.0, 72.0),
        (263.0, 76.0),
        (244.0, 328.0),
        (142.0, 311.0),
        (160.0, 185.0),
    ]
    .into_iter()
    .map(|(x, y)| Vec2::new(x, y))
    .collect()
}

/// Everything the game reads at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Frame rate the loop is paced at
    pub target_fps: u32,
    pub player: CarTuning,
    pub rival: CarTuning,
    pub track: TrackConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            player: CarTuning {
                max_velocity: 8.0,
                rotation_rate: 8.0,
                acceleration: 0.2,
            },
            rival: CarTuning {
                max_velocity: 4.0,
                rotation_rate: 6.0,
                acceleration: 0.2,
            },
            track: TrackConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "ignoring malformed settings file {}: {err}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings out as pretty JSON; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}
