//! Cartesian Settings Crate
//!
//! Handles the configuration file: initial viewport state and render sizes.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, Config, RenderSettings, ViewportSettings, CONFIG_DIR_NAME,
    CONFIG_FILE_NAME,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
