//! Type aliases for commonly used complex types.
//!
//! The plotter core is confined to one thread, so shared state uses
//! `Rc<RefCell<T>>` and callbacks are plain `Rc<dyn Fn>` handles.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cartesian_core::types::*;
//!
//! let repaints: Shared<u32> = shared(0);
//! let counter = repaints.clone();
//! let on_change: ChangeCallback = callback(move || *counter.borrow_mut() += 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when a host (UI event loop, test harness) needs to observe state that
/// a change listener updates.
pub type Shared<T> = Rc<RefCell<T>>;

/// A zero-argument change callback.
///
/// Reference counted so the same handler can be registered with a plane and
/// with the viewport presenting it.
pub type ChangeCallback = Rc<dyn Fn()>;

/// A real-valued function of one real variable, as plotted on a plane.
///
/// A `NaN` result marks the function as undefined at that input.
pub type PlotFn = Rc<dyn Fn(f64) -> f64>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Wrap a closure as a [`ChangeCallback`].
#[inline]
pub fn callback<F>(f: F) -> ChangeCallback
where
    F: Fn() + 'static,
{
    Rc::new(f)
}

/// Wrap a closure as a [`PlotFn`].
#[inline]
pub fn plot_fn<F>(f: F) -> PlotFn
where
    F: Fn(f64) -> f64 + 'static,
{
    Rc::new(f)
}
