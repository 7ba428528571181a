//! Point: An integer coordinate pair.

/// A point with integer coordinates.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate (grows to the right).
    pub x: i32,
    /// Y coordinate (grows downward).
    pub y: i32,
}

impl Point {
    /// The coordinate origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Reflect the point through the origin.
    #[inline]
    #[must_use]
    pub const fn reflected(self) -> Self {
        Self::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
