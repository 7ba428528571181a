//! C Foreign Function Interface (FFI) for rayrect.
//!
//! This module provides a C-compatible API so layout code written in other
//! languages can probe rectangles. All functions are `extern "C"` with
//! stable ABI.
//!
//! # Safety
//!
//! Output pointers may be NULL where documented; otherwise they must point
//! to writable memory owned by the caller.
//!
//! # Example (C)
//!
//! ```c
//! #include "rayrect.h"
//!
//! int main() {
//!     RayRectRect rect = { .left = 50, .top = -5, .right = 60, .bottom = 5 };
//!     RayRectPoint hit;
//!
//!     if (rayrect_intersect(rect, 0.0, &hit)) {
//!         printf("hit at %d,%d\n", hit.x, hit.y);
//!     }
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::geometry::{GeometryError, Point, Rect};
use crate::ray::{normalize_angle, Intersector};
use std::os::raw::c_char;

// =============================================================================
// Value Types
// =============================================================================

/// Rectangle passed by value, described by its edges.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayRectRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (`>= left`).
    pub right: i32,
    /// Bottom edge (`>= top`).
    pub bottom: i32,
}

impl From<RayRectRect> for Rect {
    fn from(rect: RayRectRect) -> Self {
        Self::from_edges(rect.left, rect.top, rect.right, rect.bottom)
    }
}

/// Integer intersection point.
pub type RayRectPoint = Point;

// =============================================================================
// Result Codes
// =============================================================================

/// Result codes for checked FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayRectResult {
    /// The ray crosses the rectangle.
    Hit = 0,
    /// The ray misses the rectangle.
    Miss = 1,
    /// Null pointer passed.
    NullPointer = 2,
    /// Rectangle edges are inverted or span more than `i32` can hold.
    InvalidRect = 3,
    /// Angle is not finite or outside `[0, 2π)`.
    InvalidAngle = 4,
}

impl From<GeometryError> for RayRectResult {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidRect { .. } => Self::InvalidRect,
            GeometryError::NonFiniteAngle(_) | GeometryError::AngleOutOfRange(_) => {
                Self::InvalidAngle
            }
        }
    }
}

// =============================================================================
// Intersection Functions
// =============================================================================

/// Test a ray from the origin at `angle` (clockwise radians) against `rect`.
///
/// Writes the intersection point to `point_out` when it is non-NULL; on a
/// miss the point is zeroed. Returns whether the ray hits.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rayrect_intersect(
    rect: RayRectRect,
    angle: f64,
    point_out: *mut RayRectPoint,
) -> bool {
    let hit = Intersector::new().intersect(&rect.into(), angle);
    if !point_out.is_null() {
        *point_out = hit.unwrap_or_default();
    }
    hit.is_some()
}

/// Like `rayrect_intersect`, but validates inputs and requires `point_out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rayrect_intersect_checked(
    rect: RayRectRect,
    angle: f64,
    point_out: *mut RayRectPoint,
) -> RayRectResult {
    if point_out.is_null() {
        return RayRectResult::NullPointer;
    }
    let rect = match Rect::try_from_edges(rect.left, rect.top, rect.right, rect.bottom) {
        Ok(rect) => rect,
        Err(err) => return err.into(),
    };
    match Intersector::new().checked_intersect(&rect, angle) {
        Ok(Some(point)) => {
            *point_out = point;
            RayRectResult::Hit
        }
        Ok(None) => {
            *point_out = Point::ORIGIN;
            RayRectResult::Miss
        }
        Err(err) => err.into(),
    }
}

/// Wrap an angle into `[0, 2π)`.
#[unsafe(no_mangle)]
pub extern "C" fn rayrect_normalize_angle(angle: f64) -> f64 {
    normalize_angle(angle)
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the rayrect version string.
#[unsafe(no_mangle)]
pub extern "C" fn rayrect_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr().cast::<c_char>()
}
