//! Pixel and unit conversion.
//!
//! Pure math over a [`ViewportState`] and the surface size captured for the
//! current pass. Nothing here mutates state.

use cartesian_core::{Axis, PerAxis};

use crate::state::ViewportState;

/// Translates pixel distances to plane units and back.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'a> {
    state: &'a ViewportState,
    dimensions: PerAxis<i64>,
}

impl<'a> UnitConverter<'a> {
    /// Converter for a surface of `dimensions` pixels.
    pub fn new(state: &'a ViewportState, dimensions: PerAxis<i64>) -> Self {
        Self { state, dimensions }
    }

    /// The state conversions are computed against.
    pub fn state(&self) -> &'a ViewportState {
        self.state
    }

    /// Surface extent along `axis`.
    pub fn dimension(&self, axis: Axis) -> i64 {
        self.dimensions[axis]
    }

    /// How many ticks fit across the surface along `axis`.
    pub fn ticks_on_screen(&self, axis: Axis) -> f64 {
        self.dimensions[axis] as f64 / self.state.tick_width(axis)
    }

    /// Pixels covered by one tick along `axis`.
    ///
    /// Falls back to the tick width when the surface has no extent.
    pub fn pixels_per_tick(&self, axis: Axis) -> f64 {
        let dimension = self.dimensions[axis];
        if dimension <= 0 {
            return self.state.tick_width(axis);
        }
        dimension as f64 / self.ticks_on_screen(axis)
    }

    /// Pixel distance covering `value` units along `axis`, rounded to the
    /// nearest pixel.
    ///
    /// `NaN` maps to 0 and infinities saturate.
    pub fn to_pixels(&self, value: f64, axis: Axis) -> i64 {
        ((value / self.state.step_size(axis)) * self.pixels_per_tick(axis)).round() as i64
    }

    /// Units covered by `pixels` along `axis`.
    ///
    /// Approximate inverse of [`to_pixels`](Self::to_pixels): the round trip
    /// is off by at most one pixel's worth of units.
    pub fn to_units(&self, pixels: i64, axis: Axis) -> f64 {
        (pixels as f64 / self.pixels_per_tick(axis)) * self.state.step_size(axis)
    }
}
