//! Segment: One edge of a rectangle.

use super::point::Point;
use super::rect::Rect;

/// A rectangle edge from `p1` to `p2`.
///
/// Horizontal edges run left to right, vertical edges top to bottom, so
/// `p1` always holds the smaller varying coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub const fn top(rect: &Rect) -> Self {
        Self::new(
            Point::new(rect.left(), rect.top()),
            Point::new(rect.right(), rect.top()),
        )
    }

    #[inline]
    pub const fn bottom(rect: &Rect) -> Self {
        Self::new(
            Point::new(rect.left(), rect.bottom()),
            Point::new(rect.right(), rect.bottom()),
        )
    }

    #[inline]
    pub const fn left(rect: &Rect) -> Self {
        Self::new(
            Point::new(rect.left(), rect.top()),
            Point::new(rect.left(), rect.bottom()),
        )
    }

    #[inline]
    pub const fn right(rect: &Rect) -> Self {
        Self::new(
            Point::new(rect.right(), rect.top()),
            Point::new(rect.right(), rect.bottom()),
        )
    }

    /// Horizontal edge crosses the ordinate axis (`x = 0`).
    #[inline]
    pub const fn spans_x_zero(&self) -> bool {
        self.p1.x <= 0 && self.p2.x >= 0
    }

    /// Vertical edge crosses the abscissa axis (`y = 0`).
    #[inline]
    pub const fn spans_y_zero(&self) -> bool {
        self.p1.y <= 0 && self.p2.y >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_edges() {
        let rect = Rect::new(-5, -50, 10, 10);
        assert_eq!(Segment::top(&rect), Segment::new(Point::new(-5, -50), Point::new(5, -50)));
        assert_eq!(Segment::bottom(&rect), Segment::new(Point::new(-5, -40), Point::new(5, -40)));
        assert_eq!(Segment::left(&rect), Segment::new(Point::new(-5, -50), Point::new(-5, -40)));
        assert_eq!(Segment::right(&rect), Segment::new(Point::new(5, -50), Point::new(5, -40)));
    }

    #[test]
    fn test_segment_spans_axes() {
        let rect = Rect::new(-5, -50, 10, 10);
        assert!(Segment::top(&rect).spans_x_zero());
        assert!(!Segment::right(&rect).spans_y_zero());

        let straddling = Rect::new(50, -5, 10, 10);
        assert!(Segment::right(&straddling).spans_y_zero());
        assert!(!Segment::bottom(&straddling).spans_x_zero());
    }
}
