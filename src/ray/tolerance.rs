//! Tolerance: Absolute-epsilon float comparisons.

/// Default absolute tolerance for ray comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance used for "approximately" comparisons.
///
/// Angles that sit exactly on an axis (0, π/2, π, 3π/2) make `tan` blow up
/// or lose precision, so every equality and bound check goes through here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a tolerance with the given absolute epsilon.
    #[inline]
    pub const fn new(epsilon: f64) -> Self {
        Self(epsilon)
    }

    /// The absolute epsilon.
    #[inline]
    pub const fn epsilon(self) -> f64 {
        self.0
    }

    /// `a` is within epsilon of `b` (strictly).
    #[inline]
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }

    /// `a > b`, or approximately equal.
    #[inline]
    pub fn approx_ge(self, a: f64, b: f64) -> bool {
        a > b || self.approx_eq(a, b)
    }

    /// `a < b`, or approximately equal.
    #[inline]
    pub fn approx_le(self, a: f64, b: f64) -> bool {
        a < b || self.approx_eq(a, b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}
