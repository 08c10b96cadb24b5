//! Surface dimension providers.
//!
//! The viewport never stores its pixel size; it asks the host surface on
//! every pass.

use cartesian_core::{Axis, PerAxis};
use std::cell::Cell;
use std::rc::Rc;

/// Supplies the current pixel size of the drawing surface.
pub trait SurfaceDimensions {
    /// Width in pixels
    fn width(&self) -> i64;

    /// Height in pixels
    fn height(&self) -> i64;

    /// Extent along `axis`: width for X, height for Y.
    fn dimension(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.width(),
            Axis::Y => self.height(),
        }
    }

    /// Both extents, read together.
    fn dimensions(&self) -> PerAxis<i64> {
        PerAxis::new(self.width(), self.height())
    }
}

impl<T: SurfaceDimensions + ?Sized> SurfaceDimensions for &T {
    fn width(&self) -> i64 {
        (**self).width()
    }

    fn height(&self) -> i64 {
        (**self).height()
    }
}

impl<T: SurfaceDimensions + ?Sized> SurfaceDimensions for Rc<T> {
    fn width(&self) -> i64 {
        (**self).width()
    }

    fn height(&self) -> i64 {
        (**self).height()
    }
}

/// A surface with a fixed size, e.g. an offscreen image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSurface {
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
}

impl FixedSurface {
    /// Create a surface of the given size
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl SurfaceDimensions for FixedSurface {
    fn width(&self) -> i64 {
        self.width
    }

    fn height(&self) -> i64 {
        self.height
    }
}

/// A surface the host can resize while a viewport is bound to it.
///
/// Clones share the same size cell.
#[derive(Debug, Clone, Default)]
pub struct ResizableSurface {
    size: Rc<Cell<(i64, i64)>>,
}

impl ResizableSurface {
    /// Create a surface with an initial size
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            size: Rc::new(Cell::new((width, height))),
        }
    }

    /// Change the size seen by every clone
    pub fn resize(&self, width: i64, height: i64) {
        tracing::debug!("Surface resized to {}x{}", width, height);
        self.size.set((width, height));
    }
}

impl SurfaceDimensions for ResizableSurface {
    fn width(&self) -> i64 {
        self.size.get().0
    }

    fn height(&self) -> i64 {
        self.size.get().1
    }
}
