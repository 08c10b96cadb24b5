//! Viewport state: per-axis step size and tick width plus pixel offsets.

use cartesian_core::{Axis, Direction, PerAxis, ViewportError};
use serde::{Deserialize, Serialize};

/// Default units per step on both axes.
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

/// Default pixel spacing between ticks on both axes.
pub const DEFAULT_TICK_WIDTH: f64 = 20.0;

/// Validated viewport configuration.
///
/// Step sizes and tick widths are always finite and strictly positive; the
/// setters reject anything else and leave the state untouched. Offsets are
/// unconstrained and indexed by [`Direction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    step_size: PerAxis<f64>,
    tick_width: PerAxis<f64>,
    offset: PerAxis<i64>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            step_size: PerAxis::splat(DEFAULT_STEP_SIZE),
            tick_width: PerAxis::splat(DEFAULT_TICK_WIDTH),
            offset: PerAxis::splat(0),
        }
    }
}

impl ViewportState {
    /// State with default step sizes and tick widths and a centered origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from explicit values, validating every component.
    pub fn with_values(
        step_size: PerAxis<f64>,
        tick_width: PerAxis<f64>,
    ) -> Result<Self, ViewportError> {
        let mut state = Self::default();
        for axis in Axis::ALL {
            state.set_step_size(axis, step_size[axis])?;
            state.set_tick_width(axis, tick_width[axis])?;
        }
        Ok(state)
    }

    /// Units represented by one step on `axis`.
    pub fn step_size(&self, axis: Axis) -> f64 {
        self.step_size[axis]
    }

    /// Set the step size on `axis`.
    ///
    /// # Errors
    /// [`ViewportError::InvalidStepSize`] for values that are not finite and > 0.
    pub fn set_step_size(&mut self, axis: Axis, value: f64) -> Result<(), ViewportError> {
        if !is_positive(value) {
            tracing::warn!("Rejected step size {} for axis {}", value, axis);
            return Err(ViewportError::InvalidStepSize { axis, value });
        }
        self.step_size[axis] = value;
        Ok(())
    }

    /// Pixel spacing between ticks on `axis`.
    pub fn tick_width(&self, axis: Axis) -> f64 {
        self.tick_width[axis]
    }

    /// Set the tick width on `axis`.
    ///
    /// # Errors
    /// [`ViewportError::InvalidTickWidth`] for values that are not finite and > 0.
    pub fn set_tick_width(&mut self, axis: Axis, value: f64) -> Result<(), ViewportError> {
        if !is_positive(value) {
            tracing::warn!("Rejected tick width {} for axis {}", value, axis);
            return Err(ViewportError::InvalidTickWidth { axis, value });
        }
        self.tick_width[axis] = value;
        Ok(())
    }

    /// Pixel displacement of the origin from the surface center.
    pub fn offset(&self, direction: Direction) -> i64 {
        self.offset[direction]
    }

    /// Set the origin displacement in `direction`.
    pub fn set_offset(&mut self, direction: Direction, offset: i64) {
        self.offset[direction] = offset;
    }

    /// Both step sizes.
    pub fn step_sizes(&self) -> PerAxis<f64> {
        self.step_size
    }

    /// Both tick widths.
    pub fn tick_widths(&self) -> PerAxis<f64> {
        self.tick_width
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
