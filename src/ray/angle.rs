//! Angle helpers.

use std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// The intersector never wraps on its own; a layouter walking a spiral
/// calls this before probing. Non-finite input is returned unchanged.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    // Tiny negative inputs round up to exactly TAU.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
