//! Axis and direction selectors
//!
//! Closed enumerations used to index the per-axis viewport fields. `X` pairs
//! with `Horizontal` and `Y` with `Vertical`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Plane axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The screen direction this axis runs along.
    pub fn direction(self) -> Direction {
        match self {
            Axis::X => Direction::Horizontal,
            Axis::Y => Direction::Vertical,
        }
    }

    /// The other axis.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Screen direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left/right on screen
    Horizontal,
    /// Up/down on screen
    Vertical,
}

impl Direction {
    /// The plane axis running along this direction.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::X,
            Direction::Vertical => Axis::Y,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A value held once per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerAxis<T> {
    /// Value for the X axis
    pub x: T,
    /// Value for the Y axis
    pub y: T,
}

impl<T> PerAxis<T> {
    /// Creates a pair from explicit X and Y values.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Maps both values through `f`.
    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> PerAxis<U> {
        PerAxis {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
        }
    }
}

impl<T: Copy> PerAxis<T> {
    /// Same value on both axes.
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl<T> Index<Direction> for PerAxis<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self[direction.axis()]
    }
}

impl<T> IndexMut<Direction> for PerAxis<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self[direction.axis()]
    }
}
