//! Rect: An axis-aligned rectangle in screen coordinates.

use super::error::GeometryError;
use super::point::Point;

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// The edges are inclusive: a `10x10` rectangle at `(0, 0)` spans
/// `0..=10` on both axes, the same way a placed word box is measured.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: i32,
    /// Y coordinate of the top edge.
    pub y: i32,
    /// Width (right minus left).
    pub width: i32,
    /// Height (bottom minus top).
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its four edges.
    ///
    /// No validation is done; see [`Rect::try_from_edges`].
    #[inline]
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// Create a rectangle from its four edges, rejecting inverted ones and
    /// ones whose width or height does not fit in an `i32`.
    pub const fn try_from_edges(
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Result<Self, GeometryError> {
        let err = GeometryError::InvalidRect { left, top, right, bottom };
        if right < left || bottom < top {
            return Err(err);
        }
        match (right.checked_sub(left), bottom.checked_sub(top)) {
            (Some(width), Some(height)) => Ok(Self::new(left, top, width, height)),
            _ => Err(err),
        }
    }

    /// Get the left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Get the top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Get the right edge.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check that the edges are not inverted and the far edges are
    /// representable.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.width >= 0
            && self.height >= 0
            && self.x.checked_add(self.width).is_some()
            && self.y.checked_add(self.height).is_some()
    }

    /// Check if a point lies inside or on the boundary.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Reflect the rectangle through the origin.
    #[inline]
    #[must_use]
    pub const fn reflected(&self) -> Self {
        Self::from_edges(
            self.right().saturating_neg(),
            self.bottom().saturating_neg(),
            self.left().saturating_neg(),
            self.top().saturating_neg(),
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(-5, -50, 10, 10);
        assert_eq!(rect.left(), -5);
        assert_eq!(rect.top(), -50);
        assert_eq!(rect.right(), 5);
        assert_eq!(rect.bottom(), -40);
    }

    #[test]
    fn test_rect_from_edges() {
        assert_eq!(Rect::from_edges(50, -5, 60, 5), Rect::new(50, -5, 10, 10));
        assert!(Rect::from_edges(10, 0, 0, 10).width < 0);
    }

    #[test]
    fn test_rect_try_from_edges() {
        assert_eq!(Rect::try_from_edges(0, 0, 4, 2), Ok(Rect::new(0, 0, 4, 2)));
        assert_eq!(Rect::try_from_edges(3, 3, 3, 3), Ok(Rect::new(3, 3, 0, 0)));
        assert_eq!(
            Rect::try_from_edges(10, 0, 0, 10),
            Err(GeometryError::InvalidRect { left: 10, top: 0, right: 0, bottom: 10 })
        );
        assert!(Rect::try_from_edges(0, 10, 10, 0).is_err());
    }

    #[test]
    fn test_rect_try_from_edges_too_wide() {
        assert_eq!(
            Rect::try_from_edges(-2_000_000_000, -5, 2_000_000_000, 5),
            Err(GeometryError::InvalidRect {
                left: -2_000_000_000,
                top: -5,
                right: 2_000_000_000,
                bottom: 5,
            })
        );
        assert!(Rect::try_from_edges(-5, i32::MIN, 5, i32::MAX).is_err());

        let widest = Rect::try_from_edges(0, 0, i32::MAX, 1).unwrap();
        assert_eq!(widest.right(), i32::MAX);
    }

    #[test]
    fn test_rect_contains_boundary() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(5, 10)));
        assert!(!rect.contains(Point::new(11, 5)));
        assert!(!rect.contains(Point::new(5, -1)));
    }

    #[test]
    fn test_rect_reflected() {
        let rect = Rect::new(50, -5, 10, 10);
        let reflected = rect.reflected();
        assert_eq!(reflected, Rect::new(-60, -5, 10, 10));
        assert_eq!(reflected.reflected(), rect);
    }

    #[test]
    fn test_rect_validity() {
        assert!(Rect::default().is_valid());
        assert!(!Rect::new(0, 0, -1, 3).is_valid());
        assert!(!Rect::new(i32::MAX, 0, 1, 1).is_valid());
        assert!(!Rect::new(0, i32::MAX - 2, 1, 5).is_valid());
    }
}
