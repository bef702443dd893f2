use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::difficulty::DifficultyPreset;

pub const CONFIG_PATH: &str = "snake_config.json";

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

/// Fixed game configuration. Defaults match the classic setup; an optional
/// JSON file next to the binary overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub outer_width: i32,
    pub outer_height: i32,
    pub cell_size: i32,
    pub boundary_margin: i32,
    pub difficulties: Vec<DifficultyPreset>,
    pub default_difficulty: usize,
    pub speed_increment: f32,
    /// Seconds the game-over screen ignores input before accepting R/Q.
    pub game_over_delay: f32,
    pub sound_volume: f32,
    pub initial_snake_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            outer_width: DEFAULT_WIDTH,
            outer_height: DEFAULT_HEIGHT,
            cell_size: 20,
            boundary_margin: 50,
            difficulties: vec![
                DifficultyPreset::new("Low", 5.0),
                DifficultyPreset::new("Medium", 10.0),
                DifficultyPreset::new("High", 15.0),
            ],
            default_difficulty: 1,
            speed_increment: 0.1,
            game_over_delay: 2.0,
            sound_volume: 1.0,
            initial_snake_length: 3,
        }
    }
}

impl Config {
    /// Read the config file if present; fall back to defaults on any error.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("ignoring {path}: {err:#}");
                Self::default()
            }
        }
    }

    fn load(path: &str) -> Result<Option<Self>> {
        if !Path::new(path).exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        let config: Self =
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
        config.validate()?;
        Ok(Some(config))
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.cell_size > 0, "cell_size must be positive");
        anyhow::ensure!(
            self.outer_width > 2 * (self.boundary_margin + self.cell_size)
                && self.outer_height > 2 * (self.boundary_margin + self.cell_size),
            "board leaves no playable interior"
        );
        anyhow::ensure!(!self.difficulties.is_empty(), "no difficulty presets");
        anyhow::ensure!(
            self.difficulties.iter().all(|d| d.tick_rate > 0.0),
            "tick rates must be positive"
        );
        anyhow::ensure!(
            self.default_difficulty < self.difficulties.len(),
            "default_difficulty out of range"
        );
        anyhow::ensure!(self.initial_snake_length >= 1, "snake needs a head");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.outer_width, 800);
        assert_eq!(config.outer_height, 600);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.boundary_margin, 50);
        assert_eq!(config.difficulties.len(), 3);
        assert_eq!(config.difficulties[1].name, "Medium");
        assert_eq!(config.default_difficulty, 1);
        assert_eq!(config.speed_increment, 0.1);
        assert_eq!(config.initial_snake_length, 3);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config: Config = serde_json::from_str(r#"{"cell_size": 10}"#).unwrap();
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.outer_width, 800);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("no_such_config_file.json");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_degenerate_board() {
        let config = Config {
            boundary_margin: 400,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_default_index() {
        let config = Config {
            default_difficulty: 5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
