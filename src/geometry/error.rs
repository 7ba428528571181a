//! Errors reported by the checked entry points.

use std::fmt;

/// Input rejected by a checked geometry operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// The rectangle has `right < left` or `bottom < top`.
    InvalidRect {
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
        /// Right edge.
        right: i32,
        /// Bottom edge.
        bottom: i32,
    },
    /// The angle is NaN or infinite.
    NonFiniteAngle(f64),
    /// The angle is finite but outside `[0, 2π)`.
    AngleOutOfRange(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRect { left, top, right, bottom } => write!(
                f,
                "inverted rectangle: left={left} top={top} right={right} bottom={bottom}"
            ),
            Self::NonFiniteAngle(angle) => write!(f, "ray angle is not finite: {angle}"),
            Self::AngleOutOfRange(angle) => {
                write!(f, "ray angle {angle} is outside [0, 2π)")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
