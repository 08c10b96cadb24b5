//! Configuration file handling for Cartesian
//!
//! Configuration is organized into two sections:
//! - Viewport defaults (step sizes and tick widths per axis)
//! - Render settings (surface size, point and stroke sizes)
//!
//! Files are JSON or TOML, chosen by extension. Missing fields take their
//! defaults.

use cartesian_core::{Axis, PerAxis};
use cartesian_viewport::{PaintStyle, ViewportState, DEFAULT_STEP_SIZE, DEFAULT_TICK_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "cartesian";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Initial viewport state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Units per step, per axis
    pub step_size: PerAxis<f64>,
    /// Pixels between ticks, per axis
    pub tick_width: PerAxis<f64>,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            step_size: PerAxis::splat(DEFAULT_STEP_SIZE),
            tick_width: PerAxis::splat(DEFAULT_TICK_WIDTH),
        }
    }
}

/// Rendering sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Diameter of plotted points in pixels
    pub point_diameter: u32,
    /// Stroke width of function curves
    pub function_stroke: f32,
    /// Stroke width of axes and ticks
    pub axis_stroke: f32,
    /// Half-length of tick crosshairs in pixels
    pub crosshair_half_length: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let style = PaintStyle::default();
        Self {
            width: 800,
            height: 800,
            point_diameter: style.point_diameter as u32,
            function_stroke: style.function_stroke,
            axis_stroke: style.axis_stroke,
            crosshair_half_length: style.crosshair_half_length as u32,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Viewport defaults
    pub viewport: ViewportSettings,
    /// Render settings
    pub render: RenderSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in Axis::ALL {
            let step = self.viewport.step_size[axis];
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::out_of_range(
                    &format!("viewport.step_size.{}", axis_key(axis)),
                    step,
                ));
            }
            let tick = self.viewport.tick_width[axis];
            if !(tick.is_finite() && tick > 0.0) {
                return Err(ConfigError::out_of_range(
                    &format!("viewport.tick_width.{}", axis_key(axis)),
                    tick,
                ));
            }
        }

        let render = &self.render;
        if render.width == 0 {
            return Err(ConfigError::out_of_range("render.width", render.width));
        }
        if render.height == 0 {
            return Err(ConfigError::out_of_range("render.height", render.height));
        }
        if render.point_diameter == 0 {
            return Err(ConfigError::out_of_range(
                "render.point_diameter",
                render.point_diameter,
            ));
        }
        if !(render.function_stroke.is_finite() && render.function_stroke > 0.0) {
            return Err(ConfigError::out_of_range(
                "render.function_stroke",
                render.function_stroke,
            ));
        }
        if !(render.axis_stroke.is_finite() && render.axis_stroke > 0.0) {
            return Err(ConfigError::out_of_range(
                "render.axis_stroke",
                render.axis_stroke,
            ));
        }

        Ok(())
    }

    /// Initial viewport state built from the viewport section.
    pub fn viewport_state(&self) -> SettingsResult<ViewportState> {
        Ok(ViewportState::with_values(
            self.viewport.step_size,
            self.viewport.tick_width,
        )?)
    }

    /// Paint style built from the render section.
    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            point_diameter: i64::from(self.render.point_diameter),
            function_stroke: self.render.function_stroke,
            axis_stroke: self.render.axis_stroke,
            crosshair_half_length: i64::from(self.render.crosshair_half_length),
        }
    }
}

fn axis_key(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
    }
}

/// Platform config file location, e.g. `~/.config/cartesian/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("no config directory on this platform".to_string())
    })?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
