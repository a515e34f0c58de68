// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub chain: ChainConfig,
    pub animation: AnimationConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, falling back to the
    /// working directory. The returned config has already been validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::exe_dir_path()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from("config.toml"));

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window must have a non-zero size, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.chain.node_count == 0 {
            return Err(ConfigError::Invalid("node_count must be at least 1".into()));
        }
        if self.chain.wedge_count == 0 {
            return Err(ConfigError::Invalid("wedge_count must be at least 1".into()));
        }
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".into()));
        }
        if !(self.animation.step_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "step_size must be positive, got {}",
                self.animation.step_size
            )));
        }
        if !matches!(self.rendering.texture_samples, 1 | 4) {
            return Err(ConfigError::Invalid(format!(
                "texture_samples must be 1 or 4, got {}",
                self.rendering.texture_samples
            )));
        }
        if !(self.rendering.arc_step_degrees > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arc_step_degrees must be positive, got {}",
                self.rendering.arc_step_degrees
            )));
        }

        self.style.background_color()?;
        self.style.foreground_color()?;
        Ok(())
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join("config.toml"))
    }
}
