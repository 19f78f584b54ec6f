//! # Geometry Module
//!
//! Axis-aligned bounding boxes over anything that exposes `x` and `y`.
//!
//! ## Adapting Foreign Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Point { x, y } ─────────────── impl Point2 ──────┐                    │
//! │                                                    ├──► bounding_box() │
//! │  IndexedPoint([x, y]) ──► IndexedPointAdapter ────┘                    │
//! │  (only p[0], p[1])        impl Point2                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unrelated to the money types; it shares nothing with them.

use std::fmt;
use std::ops::Index;

/// Read access to two coordinates.
pub trait Point2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl<P: Point2 + ?Sized> Point2 for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

// =============================================================================
// Point Types
// =============================================================================

/// A plain 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Point2 for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// A point that only offers indexed access (`p[0]`, `p[1]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint([f64; 2]);

impl IndexedPoint {
    pub const fn new(coords: [f64; 2]) -> Self {
        IndexedPoint(coords)
    }
}

impl Index<usize> for IndexedPoint {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `i > 1`.
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

/// Presents an [`IndexedPoint`] through the [`Point2`] interface.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPointAdapter<'a> {
    point: &'a IndexedPoint,
}

impl<'a> IndexedPointAdapter<'a> {
    pub fn new(point: &'a IndexedPoint) -> Self {
        IndexedPointAdapter { point }
    }
}

impl Point2 for IndexedPointAdapter<'_> {
    fn x(&self) -> f64 {
        self.point[0]
    }

    fn y(&self) -> f64 {
        self.point[1]
    }
}

// =============================================================================
// Bounding Box
// =============================================================================

/// Smallest axis-aligned rectangle containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl BoundingBox {
    fn around<P: Point2>(p: &P) -> Self {
        BoundingBox {
            min: (p.x(), p.y()),
            max: (p.x(), p.y()),
        }
    }

    fn include<P: Point2>(self, p: &P) -> Self {
        BoundingBox {
            min: (self.min.0.min(p.x()), self.min.1.min(p.y())),
            max: (self.max.0.max(p.x()), self.max.1.max(p.y())),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BBox: ({:?}, {:?}) - ({:?}, {:?})",
            self.min.0, self.min.1, self.max.0, self.max.1
        )
    }
}

/// Folds points into their bounding box. `None` if there are no points.
///
/// ## Example
/// ```rust
/// use pricetag_core::geometry::{bounding_box, Point};
///
/// let bbox = bounding_box([Point::new(0.0, 1.0), Point::new(2.0, -1.0)]).unwrap();
/// assert_eq!(bbox.min, (0.0, -1.0));
/// assert_eq!(bbox.max, (2.0, 1.0));
/// ```
pub fn bounding_box<I, P>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = P>,
    P: Point2,
{
    let mut points = points.into_iter();
    let first = BoundingBox::around(&points.next()?);
    Some(points.fold(first, |bbox, p| bbox.include(&p)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> Vec<Point> {
        vec![
            Point::new(0.1, 0.1),
            Point::new(0.9, 0.9),
            Point::new(0.1, 2.0),
        ]
    }

    #[test]
    fn test_bounding_box_of_points() {
        let bbox = bounding_box(cloud()).unwrap();
        assert_eq!(bbox.min, (0.1, 0.1));
        assert_eq!(bbox.max, (0.9, 2.0));
        assert_eq!(bbox.to_string(), "BBox: (0.1, 0.1) - (0.9, 2.0)");
    }

    #[test]
    fn test_bounding_box_by_reference() {
        let points = cloud();
        assert_eq!(bounding_box(&points), bounding_box(points.clone()));
    }

    #[test]
    fn test_bounding_box_through_adapter() {
        let indexed: Vec<IndexedPoint> = cloud()
            .iter()
            .map(|p| IndexedPoint::new([p.x, p.y]))
            .collect();

        let adapted = bounding_box(indexed.iter().map(IndexedPointAdapter::new));
        assert_eq!(adapted, bounding_box(cloud()));
    }

    #[test]
    fn test_single_point_and_empty() {
        let bbox = bounding_box([Point::new(-3.0, 4.0)]).unwrap();
        assert_eq!(bbox.min, bbox.max);

        assert_eq!(bounding_box(Vec::<Point>::new()), None);
    }

    #[test]
    #[should_panic]
    fn test_indexed_point_out_of_range() {
        let p = IndexedPoint::new([1.0, 2.0]);
        let _ = p[2];
    }
}
