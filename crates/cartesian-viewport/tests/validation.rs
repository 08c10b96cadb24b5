//! Rejected configuration leaves the viewport untouched and silent

use cartesian_core::{callback, shared, Axis, Plane, ViewportError};
use cartesian_viewport::{FixedSurface, Viewport};

#[test]
fn test_invalid_step_size_rejected_without_notification() {
    let plane = Plane::new();
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));
    viewport.set_step_size(Axis::X, 3.0).unwrap();

    let count = shared(0u32);
    let c = count.clone();
    viewport.add_change_listener(callback(move || *c.borrow_mut() += 1));

    for value in [0.0, -1.0] {
        let err = viewport.set_step_size(Axis::X, value).unwrap_err();
        assert_eq!(
            err,
            ViewportError::InvalidStepSize {
                axis: Axis::X,
                value
            }
        );
    }

    assert_eq!(viewport.step_size(Axis::X), 3.0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_invalid_tick_width_rejected() {
    let plane = Plane::new();
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));

    assert!(viewport.set_tick_width(Axis::Y, 0.0).is_err());
    assert!(viewport.set_tick_width(Axis::Y, f64::NAN).is_err());
    assert_eq!(viewport.tick_width(Axis::Y), 20.0);
}

#[test]
fn test_valid_change_notifies_once() {
    let plane = Plane::new();
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));
    let count = shared(0u32);
    let c = count.clone();
    viewport.add_change_listener(callback(move || *c.borrow_mut() += 1));

    viewport.set_step_size(Axis::Y, 0.5).unwrap();

    assert_eq!(viewport.step_size(Axis::Y), 0.5);
    assert_eq!(*count.borrow(), 1);
}
