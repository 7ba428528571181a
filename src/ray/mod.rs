//! Ray module: Origin rays probing placed rectangles.
//!
//! A ray always starts at the coordinate origin. Its angle is measured
//! clockwise from the positive x axis because y grows downward, and it is
//! expected in `[0, 2π)`. Only the two rectangle edges facing away from the
//! origin are tested, since a departing ray can never reach a near edge
//! first.

mod angle;
mod intersect;
mod quadrant;
mod tolerance;

pub use angle::normalize_angle;
pub use intersect::{intersect, IntersectConfig, Intersector};
pub use quadrant::{Edges, Quadrant};
pub use tolerance::{Tolerance, DEFAULT_TOLERANCE};
