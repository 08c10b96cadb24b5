//! The mathematical plane: plotted points and named functions.
//!
//! A [`Plane`] is owned by the host and shared by reference with any number
//! of viewports. All mutators take `&self` and notify registered change
//! listeners once the mutation is complete.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::PlaneError;
use crate::listener::{ChangeListeners, ListenerHandle};
use crate::types::{ChangeCallback, PlotFn};

/// A point on the plane with an optional label.
///
/// Equality is by value: two points with the same coordinates and label are
/// the same point. `0.0` and `-0.0` compare equal, as do any two `NaN`s.
#[derive(Debug, Clone)]
pub struct LabeledPoint {
    /// X coordinate in plane units.
    pub x: f64,
    /// Y coordinate in plane units.
    pub y: f64,
    /// Optional display label.
    pub label: Option<String>,
}

impl LabeledPoint {
    /// Unlabeled point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Point carrying a label.
    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for LabeledPoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.label == other.label
    }
}

impl Eq for LabeledPoint {}

impl Hash for LabeledPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.label.hash(state);
    }
}

impl From<(f64, f64)> for LabeledPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for LabeledPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({}, {})", label, self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Plotted data plus its change listeners.
#[derive(Default)]
pub struct Plane {
    title: Option<String>,
    points: RefCell<HashSet<LabeledPoint>>,
    functions: RefCell<BTreeMap<String, PlotFn>>,
    listeners: ChangeListeners,
}

impl Plane {
    /// Create an untitled, empty plane
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty plane with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Plane title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Plot a point.
    ///
    /// Returns `true` when the point was new. Re-plotting an identical point
    /// changes nothing and fires no notification.
    pub fn plot_point(&self, point: impl Into<LabeledPoint>) -> bool {
        let point = point.into();
        let inserted = self.points.borrow_mut().insert(point);
        if inserted {
            self.listeners.notify();
        }
        inserted
    }

    /// Plot a function under `label`, replacing any function with that label.
    ///
    /// # Errors
    /// [`PlaneError::EmptyLabel`] when the label is empty or whitespace; the
    /// plane is left unchanged.
    pub fn plot_function<F>(&self, label: impl Into<String>, f: F) -> Result<(), PlaneError>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.plot_fn(label, Rc::new(f))
    }

    /// Like [`plot_function`](Self::plot_function) for an already shared function.
    pub fn plot_fn(&self, label: impl Into<String>, f: PlotFn) -> Result<(), PlaneError> {
        let label = label.into();
        if label.trim().is_empty() {
            tracing::warn!("Rejected function with empty label");
            return Err(PlaneError::EmptyLabel);
        }

        let replaced = self.functions.borrow_mut().insert(label.clone(), f).is_some();
        if replaced {
            tracing::debug!("Replaced function '{}'", label);
        } else {
            tracing::debug!("Plotted function '{}'", label);
        }
        self.listeners.notify();
        Ok(())
    }

    /// Snapshot of the plotted points.
    pub fn points(&self) -> HashSet<LabeledPoint> {
        self.points.borrow().clone()
    }

    /// Snapshot of the plotted functions, ordered by label.
    pub fn functions(&self) -> BTreeMap<String, PlotFn> {
        self.functions.borrow().clone()
    }

    /// The function plotted under `label`.
    pub fn function(&self, label: &str) -> Option<PlotFn> {
        self.functions.borrow().get(label).cloned()
    }

    /// Number of plotted points
    pub fn point_count(&self) -> usize {
        self.points.borrow().len()
    }

    /// Number of plotted functions
    pub fn function_count(&self) -> usize {
        self.functions.borrow().len()
    }

    /// Register a callback fired after every mutation.
    pub fn add_change_listener(&self, callback: ChangeCallback) -> ListenerHandle {
        self.listeners.add(callback)
    }

    /// Detach a previously registered callback.
    pub fn remove_change_listener(&self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Number of attached change listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plane")
            .field("title", &self.title)
            .field("points", &self.point_count())
            .field("functions", &self.functions.borrow().keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners)
            .finish()
    }
}
