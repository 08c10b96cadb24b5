//! Raster draw sink backed by a `tiny-skia` pixmap.
//!
//! Lines, filled ellipses and colors are rasterized directly. `tiny-skia`
//! has no text shaping, so text primitives are recorded with their position
//! and logged instead of drawn.

use std::path::Path;

use anyhow::{anyhow, Result};
use cartesian_viewport::{DrawSink, Rgb, SurfaceDimensions};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// A text primitive captured during a paint pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    /// The text
    pub text: String,
    /// Baseline start column
    pub x: i64,
    /// Baseline row
    pub y: i64,
}

/// Offscreen RGBA image that a viewport can paint into.
pub struct PixmapSink {
    pixmap: Pixmap,
    paint: Paint<'static>,
    stroke: Stroke,
    labels: Vec<TextLabel>,
}

impl PixmapSink {
    /// Create a white canvas of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Err(anyhow!("Cannot allocate a {}x{} pixmap", width, height));
        };
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(0, 0, 0, 255);

        Ok(Self {
            pixmap,
            paint,
            stroke: Stroke {
                width: 1.0,
                ..Default::default()
            },
            labels: Vec::new(),
        })
    }

    /// The rendered image
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Text primitives received so far, in paint order
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// RGBA of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Encode the image as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

impl SurfaceDimensions for PixmapSink {
    fn width(&self) -> i64 {
        i64::from(self.pixmap.width())
    }

    fn height(&self) -> i64 {
        i64::from(self.pixmap.height())
    }
}

impl DrawSink for PixmapSink {
    fn set_color(&mut self, color: Rgb) {
        self.paint.set_color_rgba8(color.r, color.g, color.b, 255);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0 as f32, from.1 as f32);
        pb.line_to(to.0 as f32, to.1 as f32);
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        }
    }

    fn fill_ellipse(&mut self, x: i64, y: i64, width: i64, height: i64) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.pixmap.fill_path(
                &path,
                &self.paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn text(&mut self, text: &str, x: i64, y: i64) {
        tracing::info!("{}", text);
        self.labels.push(TextLabel {
            text: text.to_string(),
            x,
            y,
        });
    }
}
