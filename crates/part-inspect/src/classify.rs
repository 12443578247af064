//! Interior opening classification by circularity and area.

use serde::{Deserialize, Serialize};

/// Gray level separating part from background; foreground is strictly above.
pub const BINARY_THRESHOLD: u8 = 50;
/// Openings rounder than this (strictly) are candidate circles.
pub const MIN_CIRCULARITY: f64 = 0.85;
/// Circles must enclose strictly more than this many px².
pub const MIN_CIRCLE_AREA: f64 = 50.0;
/// Non-circular openings must enclose strictly more than this to be a slot.
pub const MIN_SLOT_AREA: f64 = 1000.0;

/// Outcome of classifying one interior contour.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleKind {
    Circle,
    Slot,
    /// Too small or too irregular to be a feature.
    Noise,
    /// Zero perimeter, circularity undefined.
    Degenerate,
}

/// `4π·area / perimeter²`; 1.0 for a perfect circle. `None` when the
/// perimeter is zero.
pub fn circularity(area: f64, perimeter: f64) -> Option<f64> {
    if perimeter == 0.0 {
        return None;
    }
    Some(4.0 * std::f64::consts::PI * area / (perimeter * perimeter))
}

/// Decide from precomputed descriptors; the first matching rule wins.
pub fn classify_shape(area: f64, circularity: f64) -> HoleKind {
    if circularity > MIN_CIRCULARITY && area > MIN_CIRCLE_AREA {
        HoleKind::Circle
    } else if area > MIN_SLOT_AREA {
        HoleKind::Slot
    } else {
        HoleKind::Noise
    }
}

pub fn classify_hole(area: f64, perimeter: f64) -> HoleKind {
    match circularity(area, perimeter) {
        Some(c) => classify_shape(area, c),
        None => HoleKind::Degenerate,
    }
}
