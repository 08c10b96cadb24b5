//! Pixel/unit conversion and axis placement through the public viewport API

use cartesian_core::{Axis, Direction, Plane};
use cartesian_viewport::{paint, DrawSink, FixedSurface, ResizableSurface, Rgb, Viewport};
use proptest::prelude::*;

#[test]
fn test_reference_conversion() {
    let plane = Plane::new();
    let viewport = Viewport::new(&plane, FixedSurface::new(400, 400));

    assert_eq!(viewport.to_pixels(5.0, Axis::X), 100);
    assert_eq!(viewport.to_units(100, Axis::X), 5.0);
}

#[test]
fn test_axis_positions() {
    let plane = Plane::new();
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));

    assert_eq!(viewport.axis_position_px(Axis::X), 200);
    assert_eq!(viewport.axis_position_px(Axis::Y), 200);

    viewport.set_offset(Direction::Horizontal, 50);
    assert_eq!(viewport.axis_position_px(Axis::Y), 250);
    assert_eq!(viewport.axis_position_px(Axis::X), 200);
    assert_eq!(viewport.x_to_px(0.0), 250);
}

#[test]
fn test_dimensions_read_on_every_query() {
    let plane = Plane::new();
    let surface = ResizableSurface::new(400, 400);
    let viewport = Viewport::new(&plane, surface.clone());
    assert_eq!(viewport.axis_position_px(Axis::Y), 200);

    surface.resize(600, 300);
    assert_eq!(viewport.axis_position_px(Axis::Y), 300);
    assert_eq!(viewport.axis_position_px(Axis::X), 150);
}

#[test]
fn test_screen_y_points_down() {
    let plane = Plane::new();
    let viewport = Viewport::new(&plane, FixedSurface::new(400, 400));

    assert!(viewport.y_to_px(1.0) < viewport.y_to_px(0.0));
    assert_eq!(viewport.px_to_y(viewport.y_to_px(4.0)), 4.0);
}

#[derive(Default)]
struct CountingSink {
    lines: usize,
    ellipses: usize,
}

impl DrawSink for CountingSink {
    fn set_color(&mut self, _color: Rgb) {}
    fn set_stroke_width(&mut self, _width: f32) {}
    fn line(&mut self, _from: (i64, i64), _to: (i64, i64)) {
        self.lines += 1;
    }
    fn fill_ellipse(&mut self, _x: i64, _y: i64, _width: i64, _height: i64) {
        self.ellipses += 1;
    }
    fn text(&mut self, _text: &str, _x: i64, _y: i64) {}
}

#[test]
fn test_extreme_offsets_render_without_overflow() {
    let plane = Plane::new();
    plane.plot_point((1.0, 1.0));
    plane.plot_function("identity", |x| x).unwrap();
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));

    for offset in [i64::MAX, i64::MIN] {
        viewport.set_offset(Direction::Horizontal, offset);
        viewport.set_offset(Direction::Vertical, offset);
        viewport.pan(Direction::Horizontal, offset);

        let x_layout = viewport.layout(Axis::X);
        let y_layout = viewport.layout(Axis::Y);
        assert!(x_layout.ticks().count() <= 42);
        assert!(y_layout.ticks().count() <= 42);

        let sampled = viewport.sample(|x| x);
        assert!(!sampled.samples().is_empty());

        let mut sink = CountingSink::default();
        paint(&viewport, &mut sink);
        assert_eq!(sink.ellipses, 1);
        assert!(sink.lines >= 2);
    }
}

proptest! {
    #[test]
    fn prop_round_trip_within_one_step(
        value in -1.0e4f64..1.0e4,
        step in 0.01f64..100.0,
        tick in 1.0f64..100.0,
        width in 1i64..2000,
    ) {
        let plane = Plane::new();
        let mut viewport = Viewport::new(&plane, FixedSurface::new(width, 400));
        viewport.set_step_size(Axis::X, step).unwrap();
        viewport.set_tick_width(Axis::X, tick).unwrap();

        let back = viewport.to_units(viewport.to_pixels(value, Axis::X), Axis::X);
        prop_assert!((back - value).abs() <= step);
    }
}
