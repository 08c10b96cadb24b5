//! End-to-end paint pass into the raster sink

use cartesian::{
    paint, palette_color, Axis, DrawSink, FixedSurface, LabeledPoint, PixmapSink, Plane, Rgb,
    Viewport,
};
use tempfile::TempDir;

#[test]
fn test_paint_writes_png_and_legend() {
    let plane = Plane::new();
    plane.plot_function("square", |x| x * x).unwrap();
    plane.plot_point(LabeledPoint::new(2.0, 2.0));

    let mut sink = PixmapSink::new(200, 200).unwrap();
    let viewport = Viewport::new(&plane, FixedSurface::new(200, 200));
    paint(&viewport, &mut sink);

    let labels: Vec<&str> = sink.labels().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, vec!["Step Size (X): 1", "Step Size (Y): 1"]);

    // the point at (2, 2) sits at (140, 60)
    assert_eq!(sink.pixel(140, 60), Some([0, 0, 0, 255]));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plot.png");
    sink.save_png(&path).unwrap();
    assert!(path.metadata().unwrap().len() > 0);
}

#[test]
fn test_legend_anchored_bottom_right() {
    let plane = Plane::new();
    let viewport = Viewport::new(&plane, FixedSurface::new(300, 200));
    let mut sink = PixmapSink::new(300, 200).unwrap();

    paint(&viewport, &mut sink);

    let width = sink.text_width("Step Size (X): 1");
    let line_height = sink.line_height();
    let first = &sink.labels()[0];
    assert_eq!(first.x, 300 - (width + 10));
    assert_eq!(first.y, 200 - 2 * line_height);
    assert_eq!(sink.labels()[1].y, first.y + line_height);
}

#[derive(Default)]
struct Recorder {
    colors: Vec<Rgb>,
    lines: usize,
    ellipses: Vec<(i64, i64, i64, i64)>,
}

impl DrawSink for Recorder {
    fn set_color(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    fn set_stroke_width(&mut self, _width: f32) {}

    fn line(&mut self, _from: (i64, i64), _to: (i64, i64)) {
        self.lines += 1;
    }

    fn fill_ellipse(&mut self, x: i64, y: i64, width: i64, height: i64) {
        self.ellipses.push((x, y, width, height));
    }

    fn text(&mut self, _text: &str, _x: i64, _y: i64) {}
}

#[test]
fn test_functions_colored_in_label_order() {
    let plane = Plane::new();
    plane.plot_function("b", |x| x).unwrap();
    plane.plot_function("a", |x| -x).unwrap();
    plane.plot_point((1.0, -1.0));
    let mut viewport = Viewport::new(&plane, FixedSurface::new(400, 400));
    viewport.set_step_size(Axis::Y, 2.0).unwrap();

    let mut recorder = Recorder::default();
    paint(&viewport, &mut recorder);

    assert_eq!(
        recorder.colors,
        vec![
            Rgb::BLACK,
            palette_color(0),
            palette_color(1),
            Rgb::BLACK
        ]
    );
    assert!(recorder.lines > 2);
    // (1, -1) -> (220, 210), centered 8 px circle
    assert_eq!(recorder.ellipses, vec![(216, 206, 8, 8)]);
}
