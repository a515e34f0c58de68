// src/config/config_types.rs
//
// Config types for the app. Every section falls back to the values the
// stage was tuned with, so a partial config.toml is still runnable.

use nannou::prelude::*;
use serde::Deserialize;

use super::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub texture_samples: u32,
    pub arc_step_degrees: f32, // Angular distance between arc vertices
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            texture_samples: 4,
            arc_step_degrees: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub foreground: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#212121".to_string(),
            foreground: "#4527A0".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn background_color(&self) -> Result<Rgb, ConfigError> {
        parse_hex_color(&self.background)
    }

    pub fn foreground_color(&self) -> Result<Rgb, ConfigError> {
        parse_hex_color(&self.foreground)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChainConfig {
    pub node_count: usize,
    pub wedge_count: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            node_count: 5,
            wedge_count: 4,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_ms: u64,      // Ticker period
    pub step_size: f32,    // Progress per tick, before dividing by wedge count
    pub max_catch_up: u32, // Most ticks replayed in one frame after a stall
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            step_size: 0.1,
            max_catch_up: 4,
        }
    }
}

impl AnimationConfig {
    pub fn tick_period(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

/// Parses `#RRGGBB` (leading `#` optional) into a nannou color.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, ConfigError> {
    let invalid = || ConfigError::InvalidColor(hex.to_string());

    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| invalid())
    };

    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
