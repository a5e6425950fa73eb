//! Planar grid primitives: points, map bounds, and distance metrics.
//!
//! This module provides:
//!
//! - **Point**: an integer coordinate pair on the dispatch grid
//! - **Distance metrics**: squared Euclidean (L2), Manhattan (L1), and
//!   Chebyshev (L∞) distance between points
//! - **Bounds**: the grid extent, used to cap ring-expansion searches
//!
//! Coordinates are abstract grid cells, not geographic positions. Distances
//! are computed in `i64` so that squared terms stay exact well past any
//! realistic grid size.

use serde::{Deserialize, Serialize};

/// A position on the dispatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean (L2) distance to `other`.
    ///
    /// Ordering by squared distance is identical to ordering by true
    /// distance, and stays exact in integer arithmetic.
    pub fn euclidean_sq(self, other: Point) -> i64 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);
        dx * dx + dy * dy
    }

    /// Manhattan (L1) distance to `other`: |Δx| + |Δy|.
    pub fn manhattan(self, other: Point) -> i64 {
        let dx = ((self.x as i64) - (other.x as i64)).abs();
        let dy = ((self.y as i64) - (other.y as i64)).abs();
        dx + dy
    }

    /// Chebyshev (L∞) distance to `other`: max(|Δx|, |Δy|).
    ///
    /// Points at the same Chebyshev distance from an origin form a square
    /// "ring" around it.
    pub fn chebyshev(self, other: Point) -> i64 {
        let dx = ((self.x as i64) - (other.x as i64)).abs();
        let dy = ((self.y as i64) - (other.y as i64)).abs();
        dx.max(dy)
    }
}

/// Extent of the dispatch grid.
///
/// Only the ring-expansion strategy consumes this: `max(width, height)` is
/// the largest ring radius worth scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Maximum search radius for ring expansion.
    pub fn max_extent(self) -> i64 {
        self.width.max(self.height) as i64
    }
}
