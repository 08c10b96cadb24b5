//! Fit-to-data: pick the smallest whole step size that keeps every plotted
//! point inside the surface.

use cartesian_core::{Axis, LabeledPoint, PerAxis, ViewportError};

use crate::converter::UnitConverter;
use crate::state::ViewportState;

/// Largest absolute coordinate along `axis` among the finite points, or 0.
pub fn max_abs_coordinate<'a, I>(points: I, axis: Axis) -> f64
where
    I: IntoIterator<Item = &'a LabeledPoint>,
{
    points
        .into_iter()
        .filter(|p| {
            let finite = p.is_finite();
            if !finite {
                tracing::warn!("Ignoring non-finite point {} while fitting", p);
            }
            finite
        })
        .map(|p| match axis {
            Axis::X => p.x.abs(),
            Axis::Y => p.y.abs(),
        })
        .fold(0.0, f64::max)
}

/// Smallest whole step size (>= 1) for which
/// `to_pixels(max_abs) + origin_px < dimension`.
///
/// `state` is used as scratch: its step size on `axis` holds the result on
/// success and 1 on failure.
///
/// # Errors
/// [`ViewportError::OriginOutOfView`] when the origin sits at or past the far
/// edge, where no step size can satisfy the bound.
pub fn fit_axis(
    state: &mut ViewportState,
    dimensions: PerAxis<i64>,
    origin_px: i64,
    axis: Axis,
    max_abs: f64,
) -> Result<f64, ViewportError> {
    let dimension = dimensions[axis];
    state.set_step_size(axis, 1.0)?;

    let room = dimension - origin_px;
    if room <= 0 {
        tracing::warn!(
            "Cannot fit axis {}: origin at {}px, surface {}px",
            axis,
            origin_px,
            dimension
        );
        return Err(ViewportError::OriginOutOfView {
            axis,
            origin_px,
            dimension_px: dimension,
        });
    }

    let pixels_per_tick = UnitConverter::new(state, dimensions).pixels_per_tick(axis);

    // round(max * ppt / s) < room  <=>  max * ppt / s < room - 0.5
    // Divide first so coordinates near f64::MAX do not overflow.
    let mut step = ((max_abs / (room as f64 - 0.5)) * pixels_per_tick).floor() + 1.0;
    step = step.clamp(1.0, f64::MAX);

    let fits = |state: &mut ViewportState, step: f64| -> Result<bool, ViewportError> {
        state.set_step_size(axis, step)?;
        let px = UnitConverter::new(state, dimensions).to_pixels(max_abs, axis);
        Ok(px + origin_px < dimension)
    };

    // Whole steps stop being representable past 2^53; widen the increment there.
    while !fits(state, step)? {
        let next = step + (step * f64::EPSILON).max(1.0);
        if !next.is_finite() {
            state.set_step_size(axis, 1.0)?;
            tracing::warn!(
                "Cannot fit axis {}: max |coord| {} needs an infinite step",
                axis,
                max_abs
            );
            return Err(ViewportError::InvalidStepSize { axis, value: next });
        }
        step = next;
    }
    while step > 1.0 && step - 1.0 < step && fits(state, step - 1.0)? {
        step -= 1.0;
    }
    state.set_step_size(axis, step)?;

    tracing::debug!(
        "Fitted axis {}: max |coord| {} -> step size {}",
        axis,
        max_abs,
        step
    );
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_fit(dimension: i64, origin: i64, tick_width: f64, max_abs: f64) -> f64 {
        let mut state = ViewportState::new();
        state.set_tick_width(Axis::X, tick_width).unwrap();
        let dims = PerAxis::new(dimension, dimension);
        let mut step = 1.0;
        loop {
            state.set_step_size(Axis::X, step).unwrap();
            let px = UnitConverter::new(&state, dims).to_pixels(max_abs, Axis::X);
            if px + origin < dimension {
                return step;
            }
            step += 1.0;
        }
    }

    #[test]
    fn test_matches_incremental_search() {
        for &(dimension, origin, tick_width, max_abs) in &[
            (400, 200, 20.0, 37.0),
            (400, 200, 20.0, 0.0),
            (400, 200, 20.0, 9.9),
            (400, 200, 20.0, 10.0),
            (640, 100, 7.0, 1234.5),
            (401, 200, 13.0, 500.0),
            (400, 399, 20.0, 3.0),
        ] {
            let mut state = ViewportState::new();
            state.set_tick_width(Axis::X, tick_width).unwrap();
            let step = fit_axis(
                &mut state,
                PerAxis::new(dimension, dimension),
                origin,
                Axis::X,
                max_abs,
            )
            .unwrap();
            assert_eq!(
                step,
                reference_fit(dimension, origin, tick_width, max_abs),
                "dimension {dimension}, origin {origin}, tick {tick_width}, max {max_abs}"
            );
            assert_eq!(state.step_size(Axis::X), step);
        }
    }

    #[test]
    fn test_huge_coordinate_fits_with_finite_step() {
        let mut state = ViewportState::new();
        let dims = PerAxis::new(400, 400);
        let step = fit_axis(&mut state, dims, 200, Axis::X, 1.0e308).unwrap();

        assert!(step.is_finite());
        assert!(step > 1.0e306);
        let px = UnitConverter::new(&state, dims).to_pixels(1.0e308, Axis::X);
        assert!(px + 200 < 400);
    }

    #[test]
    fn test_origin_at_edge_fails() {
        let mut state = ViewportState::new();
        state.set_step_size(Axis::Y, 3.0).unwrap();
        let err = fit_axis(&mut state, PerAxis::new(400, 400), 400, Axis::Y, 1.0).unwrap_err();

        assert!(matches!(err, ViewportError::OriginOutOfView { .. }));
        assert_eq!(state.step_size(Axis::Y), 1.0);
    }

    #[test]
    fn test_max_abs_skips_non_finite() {
        let points = [
            LabeledPoint::new(3.0, -8.0),
            LabeledPoint::new(f64::NAN, 100.0),
            LabeledPoint::new(-5.0, 1.0),
        ];
        assert_eq!(max_abs_coordinate(&points, Axis::X), 5.0);
        assert_eq!(max_abs_coordinate(&points, Axis::Y), 8.0);
        let none: [LabeledPoint; 0] = [];
        assert_eq!(max_abs_coordinate(&none, Axis::X), 0.0);
    }
}
