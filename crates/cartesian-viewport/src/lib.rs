//! # Cartesian Viewport
//!
//! Presents a [`cartesian_core::Plane`] on a pixel surface.
//!
//! - [`state`]: validated step sizes, tick widths and offsets
//! - [`converter`] / [`projection`]: pixel and unit conversion
//! - [`axis_layout`]: tick placement
//! - [`sampler`]: gap-aware function sampling
//! - [`fit`]: fit-to-data
//! - [`viewport`]: the stateful viewport bound to a plane
//! - [`paint`]: one-frame paint pass over a host [`DrawSink`]

pub mod axis_layout;
pub mod converter;
pub mod fit;
pub mod paint;
pub mod projection;
pub mod sampler;
pub mod state;
pub mod surface;
pub mod viewport;

pub use axis_layout::{AxisLayout, Tick, CROSSHAIR_HALF_LENGTH};
pub use converter::UnitConverter;
pub use paint::{paint, paint_with_style, palette_color, DrawSink, PaintStyle, Rgb, PALETTE};
pub use projection::Projection;
pub use sampler::{sample_function, Sample, SampledFunction};
pub use state::{ViewportState, DEFAULT_STEP_SIZE, DEFAULT_TICK_WIDTH};
pub use surface::{FixedSurface, ResizableSurface, SurfaceDimensions};
pub use viewport::Viewport;
