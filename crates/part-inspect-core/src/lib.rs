//! Geometry primitives and shared measurement types for part inspection.
//!
//! This crate is purely geometric: it knows about point sequences, rotated
//! rectangles and circles, but not about images or contour extraction. The
//! `part-inspect` crate feeds it contours found in a binarized image.
//!
//! All fits take `f64` points and return `f32` shapes, matching the precision
//! the measurement results are reported in.

mod circle;
mod logger;
mod polygon;
mod rotated_rect;

pub use circle::{min_enclosing_circle, Circle};
pub use polygon::{arc_length, convex_hull, polygon_area, polygon_signed_area};
pub use rotated_rect::{min_area_rect, RotatedRect};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
