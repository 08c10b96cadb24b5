//! # Cartesian Core
//!
//! Core types for the Cartesian plotter.
//! Provides the plotted data model (points and named functions), the axis
//! enumerations, change listeners and the shared error types.

pub mod axis;
pub mod error;
pub mod listener;
pub mod math;
pub mod plane;
pub mod types;

pub use axis::{Axis, Direction, PerAxis};
pub use error::{Error, PlaneError, Result, ViewportError};
pub use listener::{ChangeListeners, ListenerHandle};
pub use math::{integer_mod, round_down};
pub use plane::{LabeledPoint, Plane};

// Re-export type aliases for convenience
pub use types::{callback, plot_fn, shared, ChangeCallback, PlotFn, Shared};
