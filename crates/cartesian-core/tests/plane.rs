//! Integration tests for plane mutation and change notification

use cartesian_core::{callback, shared, LabeledPoint, Plane, PlaneError};

fn counting_listener(plane: &Plane) -> cartesian_core::Shared<u32> {
    let count = shared(0u32);
    let c = count.clone();
    plane.add_change_listener(callback(move || *c.borrow_mut() += 1));
    count
}

#[test]
fn test_plotting_identical_point_is_idempotent() {
    let plane = Plane::new();
    let count = counting_listener(&plane);

    assert!(plane.plot_point(LabeledPoint::new(1.0, 2.0)));
    assert!(!plane.plot_point(LabeledPoint::new(1.0, 2.0)));

    assert_eq!(plane.point_count(), 1);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_labeled_points_are_distinct_from_unlabeled() {
    let plane = Plane::new();
    plane.plot_point((1.0, 2.0));
    plane.plot_point(LabeledPoint::labeled(1.0, 2.0, "peak"));

    assert_eq!(plane.points().len(), 2);
}

#[test]
fn test_function_replaced_by_label() {
    let plane = Plane::new();
    let count = counting_listener(&plane);

    plane.plot_function("f", |x| x).unwrap();
    plane.plot_function("f", |x| x * 2.0).unwrap();

    let functions = plane.functions();
    assert_eq!(functions.len(), 1);
    assert_eq!((functions["f"])(3.0), 6.0);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn test_empty_label_rejected_without_mutation() {
    let plane = Plane::new();
    let count = counting_listener(&plane);

    assert_eq!(plane.plot_function("", |x| x), Err(PlaneError::EmptyLabel));
    assert_eq!(plane.plot_function("  ", |x| x), Err(PlaneError::EmptyLabel));

    assert_eq!(plane.function_count(), 0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_snapshots_are_detached() {
    let plane = Plane::new();
    plane.plot_point((0.0, 0.0));
    let before = plane.points();

    plane.plot_point((1.0, 1.0));

    assert_eq!(before.len(), 1);
    assert_eq!(plane.points().len(), 2);
}

#[test]
fn test_functions_snapshot_sorted_by_label() {
    let plane = Plane::new();
    plane.plot_function("b", |x| x).unwrap();
    plane.plot_function("a", |x| x).unwrap();
    plane.plot_function("c", |x| x).unwrap();

    let labels: Vec<String> = plane.functions().keys().cloned().collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn test_removed_listener_not_notified() {
    let plane = Plane::new();
    let count = shared(0u32);
    let c = count.clone();
    let handle = plane.add_change_listener(callback(move || *c.borrow_mut() += 1));

    plane.plot_point((1.0, 1.0));
    assert!(plane.remove_change_listener(handle));
    plane.plot_point((2.0, 2.0));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(plane.listener_count(), 0);
}

#[test]
fn test_listener_can_read_plane_during_notification() {
    let plane = std::rc::Rc::new(Plane::new());
    let seen = shared(0usize);
    let s = seen.clone();
    let weak = std::rc::Rc::downgrade(&plane);
    plane.add_change_listener(callback(move || {
        if let Some(p) = weak.upgrade() {
            *s.borrow_mut() = p.point_count();
        }
    }));

    plane.plot_point((1.0, 1.0));
    plane.plot_point((2.0, 2.0));

    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn test_listener_mutating_plane_does_not_loop() {
    let plane = std::rc::Rc::new(Plane::new());
    let calls = shared(0u32);
    let c = calls.clone();
    let weak = std::rc::Rc::downgrade(&plane);
    plane.add_change_listener(callback(move || {
        *c.borrow_mut() += 1;
        if let Some(p) = weak.upgrade() {
            let n = p.point_count() as f64;
            p.plot_point((n, n));
        }
    }));

    plane.plot_point((100.0, 100.0));

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(plane.point_count(), 2);
}
