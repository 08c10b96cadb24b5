//! Paint pass.
//!
//! Drives a [`DrawSink`] through one full frame: axes with tick crosshairs,
//! every plotted function, every plotted point, then the step-size legend.

use cartesian_core::Axis;

use crate::axis_layout::{AxisLayout, CROSSHAIR_HALF_LENGTH};
use crate::projection::Projection;
use crate::sampler::sample_function;
use crate::surface::SurfaceDimensions;
use crate::viewport::Viewport;

/// Padding between the legend and the right edge, in pixels.
pub const LEGEND_PADDING: i64 = 10;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Black, used for axes, points and text.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors assigned to functions in label order, wrapping around.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(220, 50, 47),
    Rgb::new(38, 139, 210),
    Rgb::new(133, 153, 0),
    Rgb::new(203, 75, 22),
    Rgb::new(108, 113, 196),
    Rgb::new(42, 161, 152),
    Rgb::new(211, 54, 130),
    Rgb::new(181, 137, 0),
];

/// Round-robin palette lookup.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Drawing primitives supplied by the host.
///
/// Coordinates are screen pixels with the origin at the top-left corner.
pub trait DrawSink {
    /// Color for subsequent primitives
    fn set_color(&mut self, color: Rgb);

    /// Stroke width for subsequent lines
    fn set_stroke_width(&mut self, width: f32);

    /// Straight line between two pixels
    fn line(&mut self, from: (i64, i64), to: (i64, i64));

    /// Filled ellipse inside the given bounding box
    fn fill_ellipse(&mut self, x: i64, y: i64, width: i64, height: i64);

    /// Text with its baseline starting at `(x, y)`
    fn text(&mut self, text: &str, x: i64, y: i64);

    /// Advance width of `text`. Defaults to a fixed 7 px per character.
    fn text_width(&self, text: &str) -> i64 {
        text.chars().count() as i64 * 7
    }

    /// Distance between text baselines. Defaults to 14 px.
    fn line_height(&self) -> i64 {
        14
    }
}

/// Sizes used by the paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Diameter of plotted points, in pixels
    pub point_diameter: i64,
    /// Stroke width of function polylines
    pub function_stroke: f32,
    /// Stroke width of axes and ticks
    pub axis_stroke: f32,
    /// Half-length of each tick crosshair
    pub crosshair_half_length: i64,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            point_diameter: 8,
            function_stroke: 3.0,
            axis_stroke: 1.0,
            crosshair_half_length: CROSSHAIR_HALF_LENGTH,
        }
    }
}

/// Paint one frame of `viewport` with the default style.
pub fn paint<S, D>(viewport: &Viewport<'_, S>, sink: &mut D)
where
    S: SurfaceDimensions,
    D: DrawSink + ?Sized,
{
    paint_with_style(viewport, sink, &PaintStyle::default());
}

/// Paint one frame of `viewport`.
pub fn paint_with_style<S, D>(viewport: &Viewport<'_, S>, sink: &mut D, style: &PaintStyle)
where
    S: SurfaceDimensions,
    D: DrawSink + ?Sized,
{
    let projection = viewport.projection();

    sink.set_color(Rgb::BLACK);
    sink.set_stroke_width(style.axis_stroke);
    for axis in Axis::ALL {
        paint_axis(&AxisLayout::compute(&projection, axis), sink, style);
    }

    sink.set_stroke_width(style.function_stroke);
    for (index, (label, f)) in viewport.plane().functions().iter().enumerate() {
        sink.set_color(palette_color(index));
        let sampled = sample_function(&projection, |x| f(x));
        let mut drawn = 0usize;
        for (a, b) in sampled.segments() {
            sink.line(
                (projection.x_to_px(a.x), projection.y_to_px(a.y)),
                (projection.x_to_px(b.x), projection.y_to_px(b.y)),
            );
            drawn += 1;
        }
        tracing::trace!("Painted function '{}' with {} segments", label, drawn);
    }

    sink.set_color(Rgb::BLACK);
    let diameter = style.point_diameter;
    for point in viewport.plane().points() {
        if !point.is_finite() {
            continue;
        }
        let (x, y) = projection.point_to_px(&point);
        sink.fill_ellipse(
            x.saturating_sub(diameter / 2),
            y.saturating_sub(diameter / 2),
            diameter,
            diameter,
        );
    }

    paint_legend(&projection, sink);
}

fn paint_axis<D: DrawSink + ?Sized>(layout: &AxisLayout, sink: &mut D, style: &PaintStyle) {
    let (from, to) = layout.line();
    sink.line(from, to);
    for tick in layout.ticks() {
        let (from, to) = layout.crosshair(tick, style.crosshair_half_length);
        sink.line(from, to);
    }
}

fn paint_legend<D: DrawSink + ?Sized>(projection: &Projection<'_>, sink: &mut D) {
    let state = projection.converter().state();
    let lines = [
        format!("Step Size (X): {}", state.step_size(Axis::X)),
        format!("Step Size (Y): {}", state.step_size(Axis::Y)),
    ];
    let text_width = lines.iter().map(|l| sink.text_width(l)).max().unwrap_or(0);
    let line_height = sink.line_height();

    let x = projection.width() - (text_width + LEGEND_PADDING);
    let y = projection.height() - 2 * line_height;
    for (row, line) in lines.iter().enumerate() {
        sink.text(line, x, y + row as i64 * line_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len() + 3), PALETTE[3]);
    }
}
