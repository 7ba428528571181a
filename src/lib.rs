//! # Rayrect
//!
//! Origin ray versus axis-aligned rectangle intersection.
//!
//! A cloud layouter places boxes while walking outward from a center point.
//! To know when the growing boundary has passed a placed box, it casts a ray
//! from the center at some angle and asks where that ray leaves the box.
//! Rayrect answers that one question.
//!
//! ## Core Concepts
//!
//! - **Screen coordinates**: y points down, so angles run clockwise
//! - **Far edges**: only the two edges facing away from the origin are tested
//! - **Tolerant comparisons**: axis-aligned rays are handled without dividing
//!   by a vanishing `tan`
//!
//! ## Example
//!
//! ```rust
//! use rayrect::{intersect, Point, Rect};
//!
//! let word = Rect::from_edges(50, -5, 60, 5);
//! assert_eq!(intersect(&word, 0.0), Some(Point::new(60, 0)));
//! assert_eq!(intersect(&word, std::f64::consts::PI), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ffi;
pub mod geometry;
pub mod ray;

// Re-exports for convenience
pub use geometry::{GeometryError, Point, Rect};
pub use ray::{intersect, normalize_angle, Edges, IntersectConfig, Intersector, Quadrant, Tolerance};
