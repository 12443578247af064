//! Contour-based inspection of a single mechanical part.
//!
//! The part is a bright region on a dark background. One call binarizes the
//! image, picks the largest top-level contour as the part outline, measures
//! its minimum-area rectangle, then classifies every opening directly inside
//! the outline:
//! - round openings become [`CircleResult`]s (centre and radius of the
//!   smallest enclosing circle),
//! - large non-round openings become the [`SlotResult`] (minimum-area
//!   rectangle, length along the longer side),
//! - everything else is ignored as noise.
//!
//! Alongside the numbers an RGB canvas is returned with the outline, the
//! outer box, the circles and the slot drawn on it.
//!
//! ## Quickstart
//!
//! ```no_run
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("part.png")?.decode()?;
//! let inspection = part_inspect::inspect(&img)?;
//! println!("{}", inspection.results);
//! inspection.canvas.save("part_annotated.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `part_inspect::core`: geometry primitives (hull, rotated rect, enclosing
//!   circle) and logger setup.
//! - [`ContourTopology`]: binarization and contour hierarchy.
//! - [`classify_hole`] and the threshold constants.
//! - [`inspect`], [`inspect_gray`], [`inspect_into`], [`inspect_topology`]:
//!   the entry points.
//! - [`InspectConfig`] / [`InspectReport`]: JSON config and report used by
//!   the `part-inspect` binary.

pub use part_inspect_core as core;

mod annotate;
mod classify;
mod error;
mod inspect;
mod io;
mod results;
#[cfg(test)]
mod test_utils;
mod topology;

pub use annotate::{
    canvas_from_gray, draw_circle, draw_contour, draw_rotated_rect, CIRCLE_COLOR, CONTOUR_COLOR,
    OUTER_BOX_COLOR, SLOT_COLOR,
};
pub use classify::{
    circularity, classify_hole, classify_shape, HoleKind, BINARY_THRESHOLD, MIN_CIRCLE_AREA,
    MIN_CIRCULARITY, MIN_SLOT_AREA,
};
pub use error::{status_code, InspectError, STATUS_OK};
pub use inspect::{
    inspect, inspect_gray, inspect_into, inspect_topology, select_outer_contour, Inspection,
};
pub use io::{load_image, save_canvas, InspectConfig, InspectIoError, InspectReport, TimingsMs};
pub use part_inspect_core::{Circle, RotatedRect};
pub use results::{CircleResult, MeasurementResults, SlotResult};
pub use topology::{binarize, BorderKind, Contour, ContourTopology};
