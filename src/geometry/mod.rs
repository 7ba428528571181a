//! Geometry module: Integer primitives shared by the ray intersector.
//!
//! Coordinates follow screen conventions: the ordinate axis points down, so
//! "top" has the smaller y value.

mod error;
mod point;
mod rect;
mod segment;

pub use error::GeometryError;
pub use point::Point;
pub use rect::Rect;
pub(crate) use segment::Segment;
