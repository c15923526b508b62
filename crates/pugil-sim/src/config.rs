//! Match configuration.
//!
//! Configurable parameters for the stage, the fighters, and the spawn
//! layout. Configuration can be loaded from and saved to a TOML file; every
//! default reproduces the classic tuning the simulation was built around.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

use pugil_common::{PugilError, PugilResult, Side};

use crate::fighter::{Fighter, FighterConfig};
use crate::geometry::Vec2;
use crate::stage::{Stage, DEFAULT_GRAVITY, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Configuration file name.
pub const CONFIG_FILE: &str = "pugil.toml";

/// Stage settings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    /// Stage width in world units
    pub width: f32,
    /// Stage height in world units
    pub height: f32,
    /// Downward velocity increment per airborne frame
    pub gravity: f32,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

/// Spawn layout table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Left fighter's starting position
    pub left: Vec2,
    /// Right fighter's starting position
    pub right: Vec2,
    /// Left fighter's initial hitbox offset
    pub left_hitbox_offset: Vec2,
    /// Right fighter's initial hitbox offset
    pub right_hitbox_offset: Vec2,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            left: Vec2::new(412.0, 0.0),
            right: Vec2::new(612.0, 0.0),
            left_hitbox_offset: Vec2::ZERO,
            right_hitbox_offset: Vec2::new(50.0, 0.0),
        }
    }
}

/// Match configuration parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Stage geometry and gravity
    pub stage: StageSettings,
    /// Fighter tuning shared by both corners
    pub fighters: FighterConfig,
    /// Starting positions and hitbox offsets
    pub spawn: SpawnSettings,
}

impl MatchConfig {
    /// Load configuration from the default file location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Checks that every numeric parameter is usable by the simulation.
    pub fn validate(&self) -> PugilResult<()> {
        Stage::new(self.stage.width, self.stage.height, self.stage.gravity)?;

        let f = &self.fighters;
        let extents = [
            ("fighters.width", f.width),
            ("fighters.height", f.height),
            ("fighters.hitbox_width", f.hitbox_width),
            ("fighters.hitbox_height", f.hitbox_height),
        ];
        for (field, value) in extents {
            if !value.is_finite() || value <= 0.0 {
                return Err(PugilError::invalid_config(
                    field,
                    "must be finite and positive",
                ));
            }
        }

        let tuning = [
            ("fighters.walk_speed", f.walk_speed),
            ("fighters.jump_impulse", f.jump_impulse),
            ("fighters.facing_right_offset", f.facing_right_offset),
            ("fighters.facing_left_offset", f.facing_left_offset),
        ];
        for (field, value) in tuning {
            if !value.is_finite() {
                return Err(PugilError::invalid_config(field, "must be finite"));
            }
        }

        let spawns = [
            ("spawn.left", self.spawn.left),
            ("spawn.right", self.spawn.right),
            ("spawn.left_hitbox_offset", self.spawn.left_hitbox_offset),
            ("spawn.right_hitbox_offset", self.spawn.right_hitbox_offset),
        ];
        for (field, value) in spawns {
            if !value.is_finite() {
                return Err(PugilError::invalid_config(
                    field,
                    "components must be finite",
                ));
            }
        }

        Ok(())
    }

    /// Builds the validated stage.
    pub fn stage(&self) -> PugilResult<Stage> {
        Stage::new(self.stage.width, self.stage.height, self.stage.gravity)
    }

    /// Builds the fighter for one corner.
    #[must_use]
    pub fn spawn(&self, side: Side) -> Fighter {
        let (position, hitbox_offset) = match side {
            Side::Left => (self.spawn.left, self.spawn.left_hitbox_offset),
            Side::Right => (self.spawn.right, self.spawn.right_hitbox_offset),
        };

        Fighter::with_config(position, self.fighters.clone()).with_hitbox_offset(hitbox_offset)
    }
}
