//! The viewport: a [`Plane`] presented on a pixel surface.
//!
//! Owns the [`ViewportState`], borrows the plane, and asks the surface for
//! its size on every query. Every successful state mutation notifies the
//! viewport's change listeners before returning; rejected mutations change
//! nothing and notify no one.

use std::fmt;

use cartesian_core::{
    Axis, ChangeCallback, ChangeListeners, Direction, LabeledPoint, ListenerHandle, PerAxis,
    Plane, ViewportError,
};

use crate::axis_layout::AxisLayout;
use crate::converter::UnitConverter;
use crate::fit::{fit_axis, max_abs_coordinate};
use crate::projection::Projection;
use crate::sampler::{sample_function, SampledFunction};
use crate::state::ViewportState;
use crate::surface::SurfaceDimensions;

/// Handles held while a host callback observes the plane and the viewport.
#[derive(Debug, Clone, Copy)]
struct Observation {
    plane: ListenerHandle,
    viewport: ListenerHandle,
}

/// A plane bound to a drawing surface.
pub struct Viewport<'p, S: SurfaceDimensions> {
    plane: &'p Plane,
    surface: S,
    state: ViewportState,
    listeners: ChangeListeners,
    observation: Option<Observation>,
}

impl<'p, S: SurfaceDimensions> Viewport<'p, S> {
    /// Bind `plane` to `surface` with default state.
    pub fn new(plane: &'p Plane, surface: S) -> Self {
        Self::with_state(plane, surface, ViewportState::default())
    }

    /// Bind `plane` to `surface` starting from `state`.
    pub fn with_state(plane: &'p Plane, surface: S, state: ViewportState) -> Self {
        Self {
            plane,
            surface,
            state,
            listeners: ChangeListeners::new(),
            observation: None,
        }
    }

    /// The presented plane
    pub fn plane(&self) -> &'p Plane {
        self.plane
    }

    /// The drawing surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current state
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Current surface width
    pub fn width(&self) -> i64 {
        self.surface.width()
    }

    /// Current surface height
    pub fn height(&self) -> i64 {
        self.surface.height()
    }

    /// Projection for the current state and surface size.
    pub fn projection(&self) -> Projection<'_> {
        Projection::new(&self.state, self.surface.dimensions())
    }

    /// Converter for the current state and surface size.
    pub fn converter(&self) -> UnitConverter<'_> {
        UnitConverter::new(&self.state, self.surface.dimensions())
    }

    // --- step size ---

    /// Units per step on `axis`
    pub fn step_size(&self, axis: Axis) -> f64 {
        self.state.step_size(axis)
    }

    /// Set the step size on `axis`.
    ///
    /// # Errors
    /// [`ViewportError::InvalidStepSize`] unless `value` is finite and > 0.
    pub fn set_step_size(&mut self, axis: Axis, value: f64) -> Result<(), ViewportError> {
        self.state.set_step_size(axis, value)?;
        self.notify_changed();
        Ok(())
    }

    /// Grow the step size on `axis` by one unit.
    pub fn increment_step_size(&mut self, axis: Axis) -> Result<(), ViewportError> {
        self.set_step_size(axis, self.step_size(axis) + 1.0)
    }

    /// Shrink the step size on `axis` by one unit, never below 1.
    pub fn decrement_step_size(&mut self, axis: Axis) -> Result<(), ViewportError> {
        let current = self.step_size(axis);
        if current > 1.0 {
            self.set_step_size(axis, (current - 1.0).max(1.0))?;
        }
        Ok(())
    }

    /// [`increment_step_size`](Self::increment_step_size) on both axes.
    pub fn increment_step_sizes(&mut self) -> Result<(), ViewportError> {
        Axis::ALL
            .into_iter()
            .try_for_each(|axis| self.increment_step_size(axis))
    }

    /// [`decrement_step_size`](Self::decrement_step_size) on both axes.
    pub fn decrement_step_sizes(&mut self) -> Result<(), ViewportError> {
        Axis::ALL
            .into_iter()
            .try_for_each(|axis| self.decrement_step_size(axis))
    }

    // --- tick width ---

    /// Pixels between ticks on `axis`
    pub fn tick_width(&self, axis: Axis) -> f64 {
        self.state.tick_width(axis)
    }

    /// Set the tick width on `axis`.
    ///
    /// # Errors
    /// [`ViewportError::InvalidTickWidth`] unless `value` is finite and > 0.
    pub fn set_tick_width(&mut self, axis: Axis, value: f64) -> Result<(), ViewportError> {
        self.state.set_tick_width(axis, value)?;
        self.notify_changed();
        Ok(())
    }

    /// Widen the tick spacing on `axis` by one pixel.
    pub fn increment_tick_width(&mut self, axis: Axis) -> Result<(), ViewportError> {
        self.set_tick_width(axis, self.tick_width(axis) + 1.0)
    }

    /// Narrow the tick spacing on `axis` by one pixel, never below 1.
    pub fn decrement_tick_width(&mut self, axis: Axis) -> Result<(), ViewportError> {
        let current = self.tick_width(axis);
        if current > 1.0 {
            self.set_tick_width(axis, (current - 1.0).max(1.0))?;
        }
        Ok(())
    }

    /// [`increment_tick_width`](Self::increment_tick_width) on both axes.
    pub fn increment_tick_widths(&mut self) -> Result<(), ViewportError> {
        Axis::ALL
            .into_iter()
            .try_for_each(|axis| self.increment_tick_width(axis))
    }

    /// [`decrement_tick_width`](Self::decrement_tick_width) on both axes.
    pub fn decrement_tick_widths(&mut self) -> Result<(), ViewportError> {
        Axis::ALL
            .into_iter()
            .try_for_each(|axis| self.decrement_tick_width(axis))
    }

    // --- offset ---

    /// Origin displacement in `direction`
    pub fn offset(&self, direction: Direction) -> i64 {
        self.state.offset(direction)
    }

    /// Displace the origin from the surface center.
    ///
    /// A positive horizontal offset moves the y-axis right; a positive
    /// vertical offset moves the x-axis down.
    pub fn set_offset(&mut self, direction: Direction, offset: i64) {
        self.state.set_offset(direction, offset);
        self.notify_changed();
    }

    /// Shift the origin by `delta_px` in `direction`.
    pub fn pan(&mut self, direction: Direction, delta_px: i64) {
        let offset = self.offset(direction).saturating_add(delta_px);
        self.set_offset(direction, offset);
    }

    // --- projection ---

    /// Pixel position of the drawn `axis` line.
    pub fn axis_position_px(&self, axis: Axis) -> i64 {
        self.projection().axis_position_px(axis)
    }

    /// Pixels covering `value` units along `axis`.
    pub fn to_pixels(&self, value: f64, axis: Axis) -> i64 {
        self.converter().to_pixels(value, axis)
    }

    /// Units covered by `pixels` along `axis`.
    pub fn to_units(&self, pixels: i64, axis: Axis) -> f64 {
        self.converter().to_units(pixels, axis)
    }

    /// Screen column of plane x
    pub fn x_to_px(&self, x: f64) -> i64 {
        self.projection().x_to_px(x)
    }

    /// Screen row of plane y
    pub fn y_to_px(&self, y: f64) -> i64 {
        self.projection().y_to_px(y)
    }

    /// Plane x at a screen column
    pub fn px_to_x(&self, px: i64) -> f64 {
        self.projection().px_to_x(px)
    }

    /// Plane y at a screen row
    pub fn px_to_y(&self, px: i64) -> f64 {
        self.projection().px_to_y(px)
    }

    /// Tick layout of `axis` for the current pass.
    pub fn layout(&self, axis: Axis) -> AxisLayout {
        AxisLayout::compute(&self.projection(), axis)
    }

    /// Sample `f` across the visible x-range.
    pub fn sample<F>(&self, f: F) -> SampledFunction
    where
        F: Fn(f64) -> f64,
    {
        sample_function(&self.projection(), f)
    }

    // --- fitting ---

    /// Choose the smallest whole step size on each axis that keeps every
    /// plotted point inside the surface, and return the chosen sizes.
    ///
    /// Listeners are notified once, after both axes are fitted.
    ///
    /// # Errors
    /// [`ViewportError::OriginOutOfView`] when the origin is panned to or past
    /// the far edge of an axis. That axis is left at step size 1; the other
    /// axis is still fitted.
    pub fn fit_to_data(&mut self) -> Result<PerAxis<f64>, ViewportError> {
        let points = self.plane.points();
        let dimensions = self.surface.dimensions();
        let projection = Projection::new(&self.state, dimensions);
        let origin = PerAxis::new(projection.origin_px(Axis::X), projection.origin_px(Axis::Y));

        let mut first_error = None;
        for axis in Axis::ALL {
            let max_abs = max_abs_coordinate(&points, axis);
            if let Err(err) = fit_axis(&mut self.state, dimensions, origin[axis], axis, max_abs) {
                first_error.get_or_insert(err);
            }
        }
        self.notify_changed();

        match first_error {
            Some(err) => Err(err),
            None => Ok(self.state.step_sizes()),
        }
    }

    /// Plot `point` on the plane, then fit the viewport to the data.
    pub fn plot_and_fit(
        &mut self,
        point: impl Into<LabeledPoint>,
    ) -> Result<PerAxis<f64>, ViewportError> {
        self.plane.plot_point(point);
        self.fit_to_data()
    }

    // --- change notification ---

    /// Register a callback fired after every viewport state change.
    pub fn add_change_listener(&self, callback: ChangeCallback) -> ListenerHandle {
        self.listeners.add(callback)
    }

    /// Detach a viewport change callback.
    pub fn remove_change_listener(&self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Fire `on_change` whenever the plane or this viewport changes, typically
    /// a host repaint request. Replaces any previous observer.
    pub fn observe(&mut self, on_change: ChangeCallback) {
        self.stop_observing();
        let plane = self.plane.add_change_listener(on_change.clone());
        let viewport = self.listeners.add(on_change);
        self.observation = Some(Observation { plane, viewport });
    }

    /// Detach the observer registered with [`observe`](Self::observe).
    pub fn stop_observing(&mut self) {
        if let Some(observation) = self.observation.take() {
            self.plane.remove_change_listener(observation.plane);
            self.listeners.remove(observation.viewport);
        }
    }

    /// An observer is attached
    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    fn notify_changed(&self) {
        self.listeners.notify();
    }
}

impl<S: SurfaceDimensions> Drop for Viewport<'_, S> {
    fn drop(&mut self) {
        self.stop_observing();
    }
}

impl<S: SurfaceDimensions> fmt::Debug for Viewport<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("state", &self.state)
            .field("observing", &self.is_observing())
            .finish()
    }
}
