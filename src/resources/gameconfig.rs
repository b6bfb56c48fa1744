//! Game configuration resource.
//!
//! Manages door, player and save settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [door]
//! curve = swing
//! duration = 1.0
//! swing_sign = -1.0
//! radius = 60.0
//! center_height = 100.0
//! positions = 150 0 0, -150 0 0
//! curves_file = ./curves.json
//!
//! [player]
//! walk_speed = 200.0
//! sprint_multiplier = 5.0
//! turn_rate = 45.0
//! look_up_rate = 45.0
//! reach = 200.0
//! eye_height = 64.0
//!
//! [save]
//! dir = ./saves
//! slot = SlotGame
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::door::{DEFAULT_DOOR_DURATION, DEFAULT_SWING_SIGN};
use crate::components::mapposition::Vec3;
use crate::components::player::{
    DEFAULT_EYE_HEIGHT, DEFAULT_LOOK_UP_RATE, DEFAULT_REACH, DEFAULT_SPRINT_MULTIPLIER,
    DEFAULT_TURN_RATE, DEFAULT_WALK_SPEED,
};
use crate::resources::savegame::DEFAULT_SAVE_SLOT;

/// Default safe values for startup
const DEFAULT_DOOR_CURVE: &str = "swing";
const DEFAULT_DOOR_RADIUS: f32 = 60.0;
const DEFAULT_DOOR_CENTER_HEIGHT: f32 = 100.0;
const DEFAULT_DOOR_POSITION: Vec3 = Vec3::new(150.0, 0.0, 0.0);
const DEFAULT_SAVE_DIR: &str = "./saves";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Name of the swing curve in the curve store.
    pub door_curve: String,
    /// Seconds a full door swing takes.
    pub door_duration: f32,
    /// Multiplier applied to curve samples.
    pub door_swing_sign: f32,
    /// Interaction sphere radius around each door.
    pub door_radius: f32,
    /// Height of the interaction sphere centre.
    pub door_center_height: f32,
    /// Where doors are spawned.
    pub door_positions: Vec<Vec3>,
    /// Optional JSON file with extra curves.
    pub curves_file: Option<PathBuf>,
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub turn_rate: f32,
    pub look_up_rate: f32,
    pub reach: f32,
    pub eye_height: f32,
    /// Directory holding save files.
    pub save_dir: PathBuf,
    /// Slot name used by save/load.
    pub save_slot: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            door_curve: DEFAULT_DOOR_CURVE.to_string(),
            door_duration: DEFAULT_DOOR_DURATION,
            door_swing_sign: DEFAULT_SWING_SIGN,
            door_radius: DEFAULT_DOOR_RADIUS,
            door_center_height: DEFAULT_DOOR_CENTER_HEIGHT,
            door_positions: vec![DEFAULT_DOOR_POSITION],
            curves_file: None,
            walk_speed: DEFAULT_WALK_SPEED,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            turn_rate: DEFAULT_TURN_RATE,
            look_up_rate: DEFAULT_LOOK_UP_RATE,
            reach: DEFAULT_REACH,
            eye_height: DEFAULT_EYE_HEIGHT,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            save_slot: DEFAULT_SAVE_SLOT.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [door] section
        if let Some(curve) = config.get("door", "curve") {
            self.door_curve = curve;
        }
        if let Some(v) = float("door", "duration") {
            self.door_duration = v as f32;
        }
        if let Some(v) = float("door", "swing_sign") {
            self.door_swing_sign = v as f32;
        }
        if let Some(v) = float("door", "radius") {
            self.door_radius = v as f32;
        }
        if let Some(v) = float("door", "center_height") {
            self.door_center_height = v as f32;
        }
        if let Some(list) = config.get("door", "positions") {
            match parse_positions(&list) {
                Ok(positions) => self.door_positions = positions,
                Err(e) => warn!("Ignoring door positions: {}", e),
            }
        }
        if let Some(path) = config.get("door", "curves_file") {
            self.curves_file = Some(PathBuf::from(path));
        }

        // [player] section
        if let Some(v) = float("player", "walk_speed") {
            self.walk_speed = v as f32;
        }
        if let Some(v) = float("player", "sprint_multiplier") {
            self.sprint_multiplier = v as f32;
        }
        if let Some(v) = float("player", "turn_rate") {
            self.turn_rate = v as f32;
        }
        if let Some(v) = float("player", "look_up_rate") {
            self.look_up_rate = v as f32;
        }
        if let Some(v) = float("player", "reach") {
            self.reach = v as f32;
        }
        if let Some(v) = float("player", "eye_height") {
            self.eye_height = v as f32;
        }

        // [save] section
        if let Some(dir) = config.get("save", "dir") {
            self.save_dir = PathBuf::from(dir);
        }
        if let Some(slot) = config.get("save", "slot") {
            self.save_slot = slot;
        }

        info!(
            "Loaded config: door curve={} duration={} doors={}, walk={} sprint x{}, save={:?}/{}",
            self.door_curve,
            self.door_duration,
            self.door_positions.len(),
            self.walk_speed,
            self.sprint_multiplier,
            self.save_dir,
            self.save_slot
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [door] section
        config.set("door", "curve", Some(self.door_curve.clone()));
        config.set("door", "duration", Some(self.door_duration.to_string()));
        config.set("door", "swing_sign", Some(self.door_swing_sign.to_string()));
        config.set("door", "radius", Some(self.door_radius.to_string()));
        config.set(
            "door",
            "center_height",
            Some(self.door_center_height.to_string()),
        );
        config.set(
            "door",
            "positions",
            Some(format_positions(&self.door_positions)),
        );
        if let Some(path) = &self.curves_file {
            config.set("door", "curves_file", Some(path.display().to_string()));
        }

        // [player] section
        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set(
            "player",
            "sprint_multiplier",
            Some(self.sprint_multiplier.to_string()),
        );
        config.set("player", "turn_rate", Some(self.turn_rate.to_string()));
        config.set("player", "look_up_rate", Some(self.look_up_rate.to_string()));
        config.set("player", "reach", Some(self.reach.to_string()));
        config.set("player", "eye_height", Some(self.eye_height.to_string()));

        // [save] section
        config.set("save", "dir", Some(self.save_dir.display().to_string()));
        config.set("save", "slot", Some(self.save_slot.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Parse `"x y z, x y z"` into positions. An empty list is allowed.
///
/// Commas separate entries since `;` starts an INI comment.
pub fn parse_positions(text: &str) -> Result<Vec<Vec3>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let parts: Vec<f32> = entry
                .split_whitespace()
                .map(|p| p.parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|e| format!("bad coordinate in '{}': {}", entry, e))?;
            match parts.as_slice() {
                [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
                _ => Err(format!("expected 3 coordinates in '{}'", entry)),
            }
        })
        .collect()
}

fn format_positions(positions: &[Vec3]) -> String {
    positions
        .iter()
        .map(|p| format!("{} {} {}", p.x, p.y, p.z))
        .collect::<Vec<_>>()
        .join(", ")
}
