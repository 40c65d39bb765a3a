//! Session configuration.
//!
//! Defaults, then an optional JSON file named by `TUI_BOARD_CONFIG`, then
//! individual environment variables:
//!
//! - `TUI_BOARD_WIDTH` / `TUI_BOARD_HEIGHT`: board size in cells (default 9x9)
//! - `TUI_BOARD_CELL_SIZE`: pixels per cell edge (default 5)
//! - `TUI_BOARD_FRAME_MS`: frame interval (default 16)
//! - `TUI_BOARD_GRIDLINES`: set to "1" or "true" to redraw gridlines every frame
//! - `TUI_BOARD_GRID_COLOR` / `TUI_BOARD_DEAD_COLOR` / `TUI_BOARD_ALIVE_COLOR`:
//!   `#RRGGBB` palette (default `#CCCCCC`, `#FFFFFF`, `#000000`)
//! - `TUI_BOARD_LOG_PATH`: write logs to this file (otherwise logging is off)

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::term::{surface_extent, Palette, RenderConfig, Rgb, MAX_SURFACE_EXTENT};
use crate::types::{CELL_SIZE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1 (got {width}x{height})")]
    EmptyBoard { width: u16, height: u16 },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("frame interval must be non-zero")]
    ZeroFrameInterval,
    #[error(
        "{width}x{height} board at cell size {cell_size} is too large to draw (max {max} px per edge)",
        max = MAX_SURFACE_EXTENT
    )]
    SurfaceTooLarge {
        width: u16,
        height: u16,
        cell_size: u16,
    },
    #[error("{field} must be a #RRGGBB color (got {value:?})")]
    BadColor { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub frame_ms: u32,
    pub redraw_gridlines: bool,
    pub grid_color: String,
    pub dead_color: String,
    pub alive_color: String,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            frame_ms: FRAME_MS,
            redraw_gridlines: false,
            grid_color: "#CCCCCC".to_string(),
            dead_color: "#FFFFFF".to_string(),
            alive_color: "#000000".to_string(),
            log_path: None,
        }
    }
}

impl Config {
    /// Load from the environment and validate.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("TUI_BOARD_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Override fields from `lookup`. Unparseable values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());

        if let Some(v) = parsed("TUI_BOARD_WIDTH") {
            self.width = v;
        }
        if let Some(v) = parsed("TUI_BOARD_HEIGHT") {
            self.height = v;
        }
        if let Some(v) = parsed("TUI_BOARD_CELL_SIZE") {
            self.cell_size = v;
        }
        if let Some(v) = lookup("TUI_BOARD_FRAME_MS").and_then(|s| s.trim().parse().ok()) {
            self.frame_ms = v;
        }
        if let Some(v) = lookup("TUI_BOARD_GRIDLINES") {
            self.redraw_gridlines = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("TUI_BOARD_GRID_COLOR") {
            self.grid_color = v.trim().to_string();
        }
        if let Some(v) = lookup("TUI_BOARD_DEAD_COLOR") {
            self.dead_color = v.trim().to_string();
        }
        if let Some(v) = lookup("TUI_BOARD_ALIVE_COLOR") {
            self.alive_color = v.trim().to_string();
        }
        if let Some(v) = lookup("TUI_BOARD_LOG_PATH") {
            let v = v.trim();
            self.log_path = if v.is_empty() { None } else { Some(v.to_string()) };
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        let fits = surface_extent(self.width, self.cell_size).is_some()
            && surface_extent(self.height, self.cell_size).is_some();
        if !fits {
            return Err(ConfigError::SurfaceTooLarge {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        self.palette()?;
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let color = |field: &'static str, value: &str| {
            Rgb::from_hex(value).ok_or_else(|| ConfigError::BadColor {
                field,
                value: value.to_string(),
            })
        };
        Ok(Palette {
            grid: color("grid_color", &self.grid_color)?,
            dead: color("dead_color", &self.dead_color)?,
            alive: color("alive_color", &self.alive_color)?,
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }

    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        Ok(RenderConfig {
            cell_size: self.cell_size,
            palette: self.palette()?,
            redraw_gridlines: self.redraw_gridlines,
        })
    }
}
