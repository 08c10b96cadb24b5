//! Tick placement along each axis.
//!
//! Ticks are laid out independently on both sides of the origin so that a
//! tick always lands exactly on the origin, whatever the offset.

use cartesian_core::Axis;

use crate::projection::Projection;

/// Half-length of the crosshair drawn at each tick, in pixels.
pub const CROSSHAIR_HALF_LENGTH: i64 = 5;

/// One tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Steps away from the origin; 0 is the origin itself.
    pub index: u64,
    /// Pixel coordinate along the axis.
    pub position_px: i64,
}

/// Visible ticks along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    /// The axis these ticks belong to.
    pub axis: Axis,
    /// Pixel position of the axis line across the surface.
    pub line_px: i64,
    /// Surface extent along the axis.
    pub length_px: i64,
    /// Ticks between the origin and the 0-pixel edge (left for X, top for Y).
    pub near: Vec<Tick>,
    /// Ticks between the origin and the far edge (right for X, bottom for Y).
    pub far: Vec<Tick>,
}

impl AxisLayout {
    /// Lay out the ticks of `axis` for one pass.
    pub fn compute(projection: &Projection<'_>, axis: Axis) -> Self {
        let length = projection.converter().dimension(axis);
        let origin = projection.origin_px(axis);
        let tick_width = projection.converter().state().tick_width(axis);

        let near = half_plane(origin, tick_width, -1.0, length);
        let far = half_plane(origin, tick_width, 1.0, length);

        Self {
            axis,
            line_px: projection.axis_position_px(axis),
            length_px: length,
            near,
            far,
        }
    }

    /// All ticks, near side first. The origin tick appears in both halves
    /// when visible.
    pub fn ticks(&self) -> impl Iterator<Item = &Tick> {
        self.near.iter().chain(self.far.iter())
    }

    /// Crosshair segment for `tick` as `((x1, y1), (x2, y2))` in screen space.
    pub fn crosshair(&self, tick: &Tick, half_length: i64) -> ((i64, i64), (i64, i64)) {
        match self.axis {
            Axis::X => (
                (tick.position_px, self.line_px.saturating_sub(half_length)),
                (tick.position_px, self.line_px.saturating_add(half_length)),
            ),
            Axis::Y => (
                (self.line_px.saturating_sub(half_length), tick.position_px),
                (self.line_px.saturating_add(half_length), tick.position_px),
            ),
        }
    }

    /// The full-length axis line in screen space.
    pub fn line(&self) -> ((i64, i64), (i64, i64)) {
        match self.axis {
            Axis::X => ((0, self.line_px), (self.length_px, self.line_px)),
            Axis::Y => ((self.line_px, 0), (self.line_px, self.length_px)),
        }
    }
}

/// Ticks at `origin + sign * index * tick_width` that land inside `[0, length]`.
///
/// Only indices that can reach the surface are visited, so the cost depends on
/// the surface size and not on how far the origin is panned away.
fn half_plane(origin: i64, tick_width: f64, sign: f64, length: i64) -> Vec<Tick> {
    let origin = origin as f64;
    let to_zero = -origin / (sign * tick_width);
    let to_length = (length as f64 - origin) / (sign * tick_width);

    let last = to_zero.max(to_length).floor();
    if last.is_nan() || last < 0.0 {
        return Vec::new();
    }
    // one extra index before the edge; rounding can still pull it onto the surface
    let first = (to_zero.min(to_length).ceil() - 1.0).max(0.0);

    (first as u64..=last as u64)
        .map(|index| Tick {
            index,
            position_px: (origin + sign * index as f64 * tick_width).round() as i64,
        })
        .filter(|tick| (0..=length).contains(&tick.position_px))
        .collect()
}
