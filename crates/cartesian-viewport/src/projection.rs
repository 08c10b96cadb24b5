//! Screen projection of plane coordinates.
//!
//! Places the origin on the surface and maps plane points to pixel
//! positions. Screen y grows downward, plane y grows upward.

use cartesian_core::{Axis, LabeledPoint, PerAxis};

use crate::converter::UnitConverter;
use crate::state::ViewportState;

/// Snapshot of the state and surface size used for one rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    converter: UnitConverter<'a>,
    origin: PerAxis<i64>,
}

impl<'a> Projection<'a> {
    /// Project onto a surface of `dimensions` pixels.
    ///
    /// The origin sits at the surface center displaced by the offsets; a
    /// positive horizontal offset moves it right, a positive vertical offset
    /// moves it down. Positions saturate at the `i64` range.
    pub fn new(state: &'a ViewportState, dimensions: PerAxis<i64>) -> Self {
        let origin = PerAxis::new(
            (dimensions.x / 2).saturating_add(state.offset(Axis::X.direction())),
            (dimensions.y / 2).saturating_add(state.offset(Axis::Y.direction())),
        );
        Self {
            converter: UnitConverter::new(state, dimensions),
            origin,
        }
    }

    /// The converter for this pass
    pub fn converter(&self) -> &UnitConverter<'a> {
        &self.converter
    }

    /// Surface width
    pub fn width(&self) -> i64 {
        self.converter.dimension(Axis::X)
    }

    /// Surface height
    pub fn height(&self) -> i64 {
        self.converter.dimension(Axis::Y)
    }

    /// Pixel position of the drawn `axis` line.
    ///
    /// For X this is the row the horizontal axis is drawn on
    /// (`height / 2 + vertical offset`); for Y the column of the vertical axis
    /// (`width / 2 + horizontal offset`).
    pub fn axis_position_px(&self, axis: Axis) -> i64 {
        self.origin[axis.perpendicular()]
    }

    /// Pixel coordinate of the origin measured along `axis`.
    pub fn origin_px(&self, axis: Axis) -> i64 {
        self.origin[axis]
    }

    /// Screen column of plane x.
    pub fn x_to_px(&self, x: f64) -> i64 {
        self.origin.x.saturating_add(self.converter.to_pixels(x, Axis::X))
    }

    /// Screen row of plane y.
    pub fn y_to_px(&self, y: f64) -> i64 {
        self.origin.y.saturating_sub(self.converter.to_pixels(y, Axis::Y))
    }

    /// Plane x at a screen column.
    pub fn px_to_x(&self, px: i64) -> f64 {
        self.converter.to_units(px.saturating_sub(self.origin.x), Axis::X)
    }

    /// Plane y at a screen row.
    pub fn px_to_y(&self, px: i64) -> f64 {
        self.converter.to_units(self.origin.y.saturating_sub(px), Axis::Y)
    }

    /// Screen position of a plotted point.
    pub fn point_to_px(&self, point: &LabeledPoint) -> (i64, i64) {
        (self.x_to_px(point.x), self.y_to_px(point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartesian_core::Direction;

    #[test]
    fn test_centered_origin() {
        let state = ViewportState::new();
        let projection = Projection::new(&state, PerAxis::new(400, 400));

        assert_eq!(projection.axis_position_px(Axis::X), 200);
        assert_eq!(projection.axis_position_px(Axis::Y), 200);
        assert_eq!(projection.x_to_px(0.0), 200);
        assert_eq!(projection.y_to_px(1.0), 180);
    }

    #[test]
    fn test_offsets_shift_axes() {
        let mut state = ViewportState::new();
        state.set_offset(Direction::Horizontal, 50);
        state.set_offset(Direction::Vertical, -30);
        let projection = Projection::new(&state, PerAxis::new(400, 300));

        assert_eq!(projection.axis_position_px(Axis::Y), 250);
        assert_eq!(projection.axis_position_px(Axis::X), 120);
        assert_eq!(projection.origin_px(Axis::X), 250);
        assert_eq!(projection.origin_px(Axis::Y), 120);
    }

    #[test]
    fn test_extreme_offsets_saturate() {
        let mut state = ViewportState::new();
        state.set_offset(Direction::Horizontal, i64::MAX);
        state.set_offset(Direction::Vertical, i64::MIN);
        let projection = Projection::new(&state, PerAxis::new(400, 400));

        assert_eq!(projection.axis_position_px(Axis::Y), i64::MAX);
        assert_eq!(projection.axis_position_px(Axis::X), i64::MIN + 200);
        assert_eq!(projection.x_to_px(1.0), i64::MAX);
        assert_eq!(projection.y_to_px(1.0e30), i64::MIN);
        assert!(projection.px_to_x(0) < 0.0);
    }

    #[test]
    fn test_screen_round_trip() {
        let state = ViewportState::new();
        let projection = Projection::new(&state, PerAxis::new(400, 400));

        assert_eq!(projection.px_to_x(projection.x_to_px(3.0)), 3.0);
        assert_eq!(projection.px_to_y(projection.y_to_px(-2.0)), -2.0);
        assert_eq!(
            projection.point_to_px(&LabeledPoint::new(1.0, 1.0)),
            (220, 180)
        );
    }
}
