//! Intersector: First crossing of an origin ray with a rectangle's far edges.
//!
//! # Algorithm
//!
//! 1. Classify the angle into a [`Quadrant`] and pick the far horizontal and
//!    far vertical edge of the rectangle.
//! 2. Horizontal edge: rays pointing straight up or down (3π/2, π/2) only
//!    need the edge to straddle `x = 0`. Otherwise, when the edge lies on the
//!    side the ray is heading to, project `x = y / tan(angle)` and test it
//!    against the edge's span.
//! 3. Vertical edge, only if step 2 missed: rays pointing straight left or
//!    right (π, 0) need the edge to straddle `y = 0`. Otherwise the same
//!    `y / tan(angle)` projection is taken from the edge's top point and
//!    compared against the edge's x.
//!
//! Projected coordinates are truncated toward zero.
//!
//! The step 3 general case does not solve for the y where the ray meets
//! `x = edge.x`; it reuses the horizontal projection and must stay that way
//! for placements to match existing layouts. It only reports hits for rays
//! close to a diagonal.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::{debug, trace};

use super::quadrant::Quadrant;
use super::tolerance::{Tolerance, DEFAULT_TOLERANCE};
use crate::geometry::{GeometryError, Point, Rect, Segment};

/// Configuration for the [`Intersector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectConfig {
    /// Absolute tolerance for angle and coordinate comparisons.
    pub tolerance: f64,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Tests origin rays against axis-aligned rectangles.
///
/// Stateless apart from its tolerance; calls are pure and may run from any
/// number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intersector {
    tolerance: Tolerance,
}

impl Intersector {
    /// Create an intersector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an intersector with a custom configuration.
    pub const fn with_config(config: IntersectConfig) -> Self {
        Self {
            tolerance: Tolerance::new(config.tolerance),
        }
    }

    /// The tolerance in use.
    pub const fn tolerance(self) -> Tolerance {
        self.tolerance
    }

    /// Find where a ray at `angle` first crosses the far edges of `rect`.
    ///
    /// `angle` is clockwise radians in `[0, 2π)`; it is not wrapped here.
    /// Inverted rectangles and out-of-range angles give unspecified results.
    pub fn intersect(self, rect: &Rect, angle: f64) -> Option<Point> {
        let quadrant = Quadrant::from_angle(angle);
        let (horizontal, vertical) = quadrant.far_segments(rect);
        trace!(?rect, angle, ?quadrant, "probing far edges");

        if let Some(point) = self.cross_horizontal(&horizontal, angle) {
            trace!(?point, "hit horizontal edge");
            return Some(point);
        }
        let hit = self.cross_vertical(&vertical, angle);
        match hit {
            Some(point) => trace!(?point, "hit vertical edge"),
            None => trace!("missed"),
        }
        hit
    }

    /// Like [`Intersector::intersect`], but rejects inverted rectangles and
    /// angles outside `[0, 2π)`.
    pub fn checked_intersect(
        self,
        rect: &Rect,
        angle: f64,
    ) -> Result<Option<Point>, GeometryError> {
        if !rect.is_valid() {
            debug!(?rect, "rejecting inverted rectangle");
            return Err(GeometryError::InvalidRect {
                left: rect.left(),
                top: rect.top(),
                right: rect.right(),
                bottom: rect.bottom(),
            });
        }
        if !angle.is_finite() {
            debug!(angle, "rejecting non-finite angle");
            return Err(GeometryError::NonFiniteAngle(angle));
        }
        if !(0.0..TAU).contains(&angle) {
            debug!(angle, "rejecting angle outside [0, 2π)");
            return Err(GeometryError::AngleOutOfRange(angle));
        }
        Ok(self.intersect(rect, angle))
    }

    fn cross_horizontal(self, segment: &Segment, angle: f64) -> Option<Point> {
        let tol = self.tolerance;
        let y = segment.p1.y;

        let straight_up = tol.approx_eq(angle, 1.5 * PI) && y < 0;
        let straight_down = tol.approx_eq(angle, FRAC_PI_2) && y > 0;

        if straight_up || straight_down {
            segment.spans_x_zero().then_some(Point::new(0, y))
        } else if heads_toward(angle, y) {
            let x = f64::from(y) / angle.tan();
            let within = tol.approx_ge(x, f64::from(segment.p1.x))
                && tol.approx_le(x, f64::from(segment.p2.x));
            within.then_some(Point::new(truncate(x), y))
        } else {
            None
        }
    }

    fn cross_vertical(self, segment: &Segment, angle: f64) -> Option<Point> {
        let tol = self.tolerance;
        let x = segment.p1.x;

        let straight_left = tol.approx_eq(angle, PI) && x < 0;
        let straight_right = tol.approx_eq(angle, 0.0) && x > 0;

        if straight_left || straight_right {
            segment.spans_y_zero().then_some(Point::new(x, 0))
        } else if heads_toward(angle, segment.p1.y) {
            let projected = f64::from(segment.p1.y) / angle.tan();
            let within = tol.approx_ge(projected, f64::from(segment.p1.x))
                && tol.approx_le(projected, f64::from(segment.p2.x));
            within.then_some(Point::new(truncate(projected), segment.p1.y))
        } else {
            None
        }
    }
}

/// Find where a ray at `angle` first crosses the far edges of `rect`, using
/// the default tolerance.
pub fn intersect(rect: &Rect, angle: f64) -> Option<Point> {
    Intersector::new().intersect(rect, angle)
}

/// The ray has a vertical component pointing at `y`: up (`angle > π`) for
/// negative y, down (`angle < π`) for positive y.
#[inline]
fn heads_toward(angle: f64, y: i32) -> bool {
    (angle > PI && y < 0) || (angle < PI && y > 0)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i32 {
    value as i32
}
