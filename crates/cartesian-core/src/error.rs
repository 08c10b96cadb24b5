//! Error handling for Cartesian
//!
//! Provides error types for each layer of the plotter:
//! - Plane errors (precondition violations on plotted data)
//! - Viewport errors (invalid step size / tick width configuration)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::axis::Axis;
use thiserror::Error;

/// Plane error type
///
/// Raised before any mutation takes place; the plane is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaneError {
    /// Function label is empty or whitespace only
    #[error("Function label must not be empty")]
    EmptyLabel,
}

/// Viewport error type
///
/// Represents rejected viewport mutations. A rejected mutation leaves the
/// viewport state untouched and fires no change notification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// Step size must be a finite value greater than zero
    #[error("Invalid step size {value} for axis {axis}: must be > 0")]
    InvalidStepSize {
        /// The axis the step size was meant for.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },

    /// Tick width must be a finite value greater than zero
    #[error("Invalid tick width {value} for axis {axis}: must be > 0")]
    InvalidTickWidth {
        /// The axis the tick width was meant for.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },

    /// The origin sits at or beyond the far edge, so no step size can fit the data
    #[error("Origin at {origin_px}px lies outside the {dimension_px}px surface on axis {axis}")]
    OriginOutOfView {
        /// The axis being fitted.
        axis: Axis,
        /// Pixel position of the origin along that axis.
        origin_px: i64,
        /// Surface dimension along that axis.
        dimension_px: i64,
    },
}

/// Main error type for Cartesian
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Plane error
    #[error(transparent)]
    Plane(#[from] PlaneError),

    /// Viewport error
    #[error(transparent)]
    Viewport(#[from] ViewportError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a plane error
    pub fn is_plane_error(&self) -> bool {
        matches!(self, Error::Plane(_))
    }

    /// Check if this is a viewport error
    pub fn is_viewport_error(&self) -> bool {
        matches!(self, Error::Viewport(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
