use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::engine::core::EngineConfig;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "PICCOLO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "piccolo.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub caption: String,
    pub width: i32,
    pub height: i32,
    pub framerate: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            caption: "Piccolo".to_string(),
            width: 800,
            height: 400,
            framerate: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ground_level: i32,
    pub ground_offset: i32,
    pub sky_y: i32,
    pub walk_speed: i32,
    pub jump_step: i32,
    pub gravity_max: i32,
    pub edge_limit_left: i32,
    pub edge_limit_right: i32,
    pub edge_entry_offset: i32,
}

impl PhysicsConfig {
    /// Bottom edge of a player standing on the ground.
    pub fn rest(&self) -> i32 {
        self.ground_level + self.ground_offset
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ground_level: 320,
            ground_offset: 5,
            sky_y: -120,
            walk_speed: 5,
            jump_step: 10,
            gravity_max: -50,
            edge_limit_left: 35,
            edge_limit_right: 40,
            edge_entry_offset: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: i32,
    pub animation_step: f32,
    pub placeholder_color: (u8, u8, u8),
    pub placeholder_size: (u32, u32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 100,
            animation_step: 0.1,
            placeholder_color: (177, 156, 217),
            placeholder_size: (50, 80),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `graphics/` and `audio/`.
    pub root: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("media"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub assets: AssetConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text).context("failed to parse config")?;
        config.validate().context("invalid config values")?;
        Ok(config)
    }

    /// Rejects tuning the movement and jump rules cannot run with.
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        let physics = &self.physics;
        if display.framerate == 0 {
            bail!("display.framerate must be positive");
        }
        let edges = physics.edge_limit_left + physics.edge_limit_right;
        if display.width <= edges {
            bail!(
                "display.width {} must exceed the combined edge limits {edges}",
                display.width
            );
        }
        if physics.walk_speed < 0 {
            bail!("physics.walk_speed must not be negative");
        }
        if physics.jump_step <= 0 {
            bail!("physics.jump_step must be positive");
        }
        if physics.gravity_max >= 0 {
            bail!("physics.gravity_max must be negative");
        }
        let step = self.player.animation_step;
        if !step.is_finite() || step < 0.0 {
            bail!("player.animation_step must be a finite non-negative number");
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Loads `$PICCOLO_CONFIG` or `./piccolo.ron`, falling back to defaults
    /// when neither file exists.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        tracing::info!(path = %path.display(), "loading config");
        Self::load(path)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            app_name: self.display.caption.clone(),
            window_width: self.display.width.max(1) as u32,
            window_height: self.display.height.max(1) as u32,
            target_fps: self.display.framerate,
        }
    }
}
