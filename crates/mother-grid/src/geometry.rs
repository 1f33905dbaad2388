//! Core geometry types for mother-grid.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! A segment is just four numbers, so it derives `Copy`: passing a `Line`
//! around duplicates those numbers instead of moving ownership.
//! `PartialEq` lets the tests compare whole segment lists with `==`.

/// A 2D point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
///
/// Segments are never mutated after generation; a parameter change
/// produces a brand new list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a segment from two points.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Horizontal extent, signed (`x2 - x1`).
    #[inline]
    pub fn dx(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Vertical extent, signed (`y2 - y1`). Positive means downward.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Bounding box of a set of segments, or `None` if there are none.
///
/// ## Rust Lesson #6: Option<T>
///
/// An empty pattern has no bounds at all, which is different from
/// bounds of zero size. `Option` makes the caller handle that case.
pub fn bounds_of(lines: &[Line]) -> Option<Bounds> {
    if lines.is_empty() {
        return None;
    }

    let xs = lines.iter().flat_map(|l| [l.x1, l.x2]);
    let ys = lines.iter().flat_map(|l| [l.y1, l.y2]);

    let min_x = xs.clone().fold(f64::INFINITY, f64::min);
    let max_x = xs.fold(f64::NEG_INFINITY, f64::max);
    let min_y = ys.clone().fold(f64::INFINITY, f64::min);
    let max_y = ys.fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}
