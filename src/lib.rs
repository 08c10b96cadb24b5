//! # Cartesian
//!
//! A 2D function and point plotter:
//! - A plane of labeled points and named real-valued functions
//! - A viewport mapping plane units to pixels, with panning and step sizes
//! - Gap-aware function sampling and fit-to-data
//!
//! ## Architecture
//!
//! Cartesian is organized as a workspace with multiple crates:
//!
//! 1. **cartesian-core** - Plane, axes, change listeners, errors
//! 2. **cartesian-viewport** - Viewport state, conversion, tick layout, sampling, fitting, painting
//! 3. **cartesian-settings** - JSON/TOML configuration
//! 4. **cartesian** - Logging setup, raster output and the demo binary

pub mod raster;

pub use cartesian_core::{
    callback, integer_mod, plot_fn, round_down, shared, Axis, ChangeCallback, Direction, Error,
    LabeledPoint, ListenerHandle, PerAxis, Plane, PlaneError, PlotFn, Result, Shared,
    ViewportError,
};
pub use cartesian_settings::{default_config_path, Config, SettingsError};
pub use cartesian_viewport::{
    paint, paint_with_style, palette_color, AxisLayout, DrawSink, FixedSurface, PaintStyle,
    Projection, Rgb, SampledFunction, SurfaceDimensions, UnitConverter, Viewport, ViewportState,
};
pub use raster::{PixmapSink, TextLabel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Cargo profile the library was built with
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - `RUST_LOG` environment variable support, `INFO` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
