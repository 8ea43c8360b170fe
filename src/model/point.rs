//! Integer 2D point with named component-wise operations.
//!
//! Operations are explicit methods rather than operator overloads: the
//! semantics (component-wise add/subtract, lexicographic ordering on
//! `(x, y)`) live in named functions the rest of the crate calls directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point with integer coordinates.
///
/// The derived `Ord` is lexicographic on `(x, y)`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of `self` and `other`.
    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Both coordinates multiplied by `factor`, or `None` when either
    /// product overflows i64.
    #[inline]
    pub fn checked_scaled(self, factor: i64) -> Option<Point> {
        Some(Point::new(
            self.x.checked_mul(factor)?,
            self.y.checked_mul(factor)?,
        ))
    }

    /// Euclidean length of the vector from the origin to this point.
    ///
    /// Computed in f64, so it cannot overflow even at the extremes of the
    /// coordinate range.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
