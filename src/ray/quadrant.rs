//! Quadrant: Angle classification and far-edge selection.

use std::f64::consts::{FRAC_PI_2, PI};

use bitflags::bitflags;

use crate::geometry::{Rect, Segment};

bitflags! {
    /// A set of rectangle edges.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Edges: u8 {
        /// Top edge (smallest y).
        const TOP = 0b0001;
        /// Bottom edge (largest y).
        const BOTTOM = 0b0010;
        /// Left edge (smallest x).
        const LEFT = 0b0100;
        /// Right edge (largest x).
        const RIGHT = 0b1000;
    }
}

/// Screen-space quadrant a ray heads into.
///
/// Boundaries are inclusive on the low side, so `π/2` is already
/// `DownLeft` and `π` is already `UpLeft`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    /// `[0, π/2)`: right and down.
    DownRight,
    /// `[π/2, π)`: left and down.
    DownLeft,
    /// `[π, 3π/2)`: left and up.
    UpLeft,
    /// `[3π/2, 2π)`: right and up.
    UpRight,
}

impl Quadrant {
    /// Classify a clockwise angle in radians.
    ///
    /// Negative and NaN angles land in `DownRight`; angles of `2π` and above
    /// land in `UpRight`.
    pub fn from_angle(angle: f64) -> Self {
        if angle >= 1.5 * PI {
            Self::UpRight
        } else if angle >= PI {
            Self::UpLeft
        } else if angle >= FRAC_PI_2 {
            Self::DownLeft
        } else {
            Self::DownRight
        }
    }

    /// The horizontal and vertical edges facing away from the origin.
    pub const fn far_edges(self) -> Edges {
        match self {
            Self::DownRight => Edges::BOTTOM.union(Edges::RIGHT),
            Self::DownLeft => Edges::BOTTOM.union(Edges::LEFT),
            Self::UpLeft => Edges::TOP.union(Edges::LEFT),
            Self::UpRight => Edges::TOP.union(Edges::RIGHT),
        }
    }

    /// Far horizontal and vertical segments of `rect`, in that order.
    pub(crate) fn far_segments(self, rect: &Rect) -> (Segment, Segment) {
        let edges = self.far_edges();
        let horizontal = if edges.contains(Edges::TOP) {
            Segment::top(rect)
        } else {
            Segment::bottom(rect)
        };
        let vertical = if edges.contains(Edges::LEFT) {
            Segment::left(rect)
        } else {
            Segment::right(rect)
        };
        (horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_quadrant_from_angle() {
        assert_eq!(Quadrant::from_angle(0.0), Quadrant::DownRight);
        assert_eq!(Quadrant::from_angle(PI / 4.0), Quadrant::DownRight);
        assert_eq!(Quadrant::from_angle(FRAC_PI_2), Quadrant::DownLeft);
        assert_eq!(Quadrant::from_angle(PI), Quadrant::UpLeft);
        assert_eq!(Quadrant::from_angle(1.5 * PI), Quadrant::UpRight);
        assert_eq!(Quadrant::from_angle(1.99 * PI), Quadrant::UpRight);
    }

    #[test]
    fn test_quadrant_out_of_range() {
        assert_eq!(Quadrant::from_angle(-0.1), Quadrant::DownRight);
        assert_eq!(Quadrant::from_angle(f64::NAN), Quadrant::DownRight);
        assert_eq!(Quadrant::from_angle(7.0), Quadrant::UpRight);
    }

    #[test]
    fn test_far_edges_one_per_axis() {
        for quadrant in [
            Quadrant::DownRight,
            Quadrant::DownLeft,
            Quadrant::UpLeft,
            Quadrant::UpRight,
        ] {
            let edges = quadrant.far_edges();
            assert_eq!(edges.bits().count_ones(), 2);
            assert!(edges.intersects(Edges::TOP | Edges::BOTTOM));
            assert!(edges.intersects(Edges::LEFT | Edges::RIGHT));
        }
    }

    #[test]
    fn test_far_segments() {
        let rect = Rect::new(10, 20, 5, 5);
        let top = (Point::new(10, 20), Point::new(15, 20));
        let bottom = (Point::new(10, 25), Point::new(15, 25));
        let left = (Point::new(10, 20), Point::new(10, 25));
        let right = (Point::new(15, 20), Point::new(15, 25));

        let cases = [
            (Quadrant::DownRight, bottom, right),
            (Quadrant::DownLeft, bottom, left),
            (Quadrant::UpLeft, top, left),
            (Quadrant::UpRight, top, right),
        ];
        for (quadrant, horizontal, vertical) in cases {
            let (h, v) = quadrant.far_segments(&rect);
            assert_eq!((h.p1, h.p2), horizontal, "{quadrant:?} horizontal");
            assert_eq!((v.p1, v.p2), vertical, "{quadrant:?} vertical");
        }
    }
}
