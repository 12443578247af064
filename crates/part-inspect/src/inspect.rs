//! Inspection entry points: outer contour selection, hole classification and
//! the precondition checks in front of them.

use image::{DynamicImage, GrayImage, RgbImage};
use log::{debug, info, warn};

use crate::annotate::{
    canvas_from_gray, draw_circle, draw_contour, draw_rotated_rect, CIRCLE_COLOR, CONTOUR_COLOR,
    OUTER_BOX_COLOR, SLOT_COLOR,
};
use crate::classify::{classify_hole, HoleKind, BINARY_THRESHOLD};
use crate::error::InspectError;
use crate::results::{CircleResult, MeasurementResults, SlotResult};
use crate::topology::ContourTopology;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Output of a successful inspection.
#[derive(Clone, Debug)]
pub struct Inspection {
    pub results: MeasurementResults,
    /// RGB copy of the input with the detected features drawn on it.
    pub canvas: RgbImage,
}

/// Index of the top-level contour with the largest area.
///
/// On equal areas the contour discovered first wins. Contours enclosing no
/// area (single pixels, 1-px lines) never qualify, so `None` means there is
/// no part in the image.
pub fn select_outer_contour(topology: &ContourTopology) -> Option<usize> {
    let mut best = None;
    let mut best_area = 0.0;
    for (idx, contour) in topology.top_level() {
        let area = contour.area();
        if area > best_area {
            best = Some(idx);
            best_area = area;
        }
    }
    best
}

/// Inspect an image of any pixel type.
///
/// Only 8-bit single-channel images are accepted; everything else fails
/// with [`InspectError::UnsupportedChannelCount`].
pub fn inspect(image: &DynamicImage) -> Result<Inspection, InspectError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(InspectError::EmptyInput);
    }
    match image {
        DynamicImage::ImageLuma8(gray) => inspect_gray(gray),
        other => Err(InspectError::UnsupportedChannelCount {
            color: other.color(),
        }),
    }
}

/// Inspect a grayscale image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(gray), fields(width = gray.width(), height = gray.height()))
)]
pub fn inspect_gray(gray: &GrayImage) -> Result<Inspection, InspectError> {
    if gray.width() == 0 || gray.height() == 0 {
        return Err(InspectError::EmptyInput);
    }
    let topology = ContourTopology::extract(gray, BINARY_THRESHOLD);
    debug!("found {} contours", topology.len());

    let mut canvas = canvas_from_gray(gray);
    let results = inspect_topology(&topology, &mut canvas)?;
    Ok(Inspection { results, canvas })
}

/// Status-code style entry point: on success the caller's `results` are
/// replaced and the canvas is returned; on failure `results` is left as it
/// was.
pub fn inspect_into(
    image: &DynamicImage,
    results: &mut MeasurementResults,
) -> Result<RgbImage, InspectError> {
    let inspection = inspect(image)?;
    *results = inspection.results;
    Ok(inspection.canvas)
}

/// Classify and measure an already extracted contour set, drawing onto
/// `canvas`. Nothing is drawn when no outer contour exists.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(topology, canvas), fields(contours = topology.len()))
)]
pub fn inspect_topology(
    topology: &ContourTopology,
    canvas: &mut RgbImage,
) -> Result<MeasurementResults, InspectError> {
    let outer_idx = select_outer_contour(topology).ok_or(InspectError::NoPartContourFound)?;
    let outer = &topology.contours()[outer_idx];

    let mut results = MeasurementResults {
        bounding_box: outer.min_area_rect().unwrap_or_default(),
        ..MeasurementResults::default()
    };
    debug!(
        "outer contour #{outer_idx}: {} points, box {:.1} x {:.1} @ {:.2} deg",
        outer.points.len(),
        results.bounding_box.width,
        results.bounding_box.height,
        results.bounding_box.angle_deg
    );
    draw_contour(canvas, outer, CONTOUR_COLOR);
    draw_rotated_rect(canvas, &results.bounding_box, OUTER_BOX_COLOR);

    for (idx, hole) in topology.children_of(outer_idx) {
        let area = hole.area();
        let perimeter = hole.perimeter();
        match classify_hole(area, perimeter) {
            HoleKind::Circle => {
                let Some(circle) = hole.min_enclosing_circle() else {
                    continue;
                };
                let circle = CircleResult::from(circle);
                debug!(
                    "contour #{idx}: circle r={:.2} at ({:.1}, {:.1})",
                    circle.radius, circle.center.x, circle.center.y
                );
                draw_circle(canvas, &circle, CIRCLE_COLOR);
                results.circles.push(circle);
            }
            HoleKind::Slot => {
                let Some(rect) = hole.min_area_rect() else {
                    continue;
                };
                let slot = SlotResult::from_rect(&rect);
                results.slot_candidates += 1;
                if results.slot.is_some() {
                    warn!("contour #{idx}: another slot candidate replaces the previous one");
                }
                debug!(
                    "contour #{idx}: slot {:.1} x {:.1} @ {:.2} deg",
                    slot.length, slot.width, slot.angle_deg
                );
                draw_rotated_rect(canvas, &rect, SLOT_COLOR);
                results.slot = Some(slot);
            }
            HoleKind::Noise => {
                debug!("contour #{idx}: ignored as noise (area {area:.1})");
            }
            HoleKind::Degenerate => {
                debug!("contour #{idx}: zero perimeter, skipped");
            }
        }
    }

    info!(
        "inspection done: {} circle(s), slot {}",
        results.circles.len(),
        if results.slot.is_some() { "found" } else { "absent" }
    );
    Ok(results)
}
