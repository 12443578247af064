use std::fmt;

use nalgebra::Point2;
use part_inspect_core::{Circle, RotatedRect};
use serde::{Deserialize, Serialize};

/// One round hole: centre and radius of its smallest enclosing circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl From<Circle> for CircleResult {
    fn from(c: Circle) -> Self {
        Self {
            center: c.center,
            radius: c.radius,
        }
    }
}

/// The slot opening, measured by its minimum-area rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotResult {
    pub center: Point2<f32>,
    /// Longer side of the rectangle.
    pub length: f32,
    /// Shorter side of the rectangle.
    pub width: f32,
    /// Direction of the length axis in degrees, `[0, 180)`, image coordinates.
    pub angle_deg: f32,
}

impl SlotResult {
    pub fn from_rect(rect: &RotatedRect) -> Self {
        // `rect.angle_deg` is the direction of `rect.width`.
        let (length, width, angle_deg) = if rect.width >= rect.height {
            (rect.width, rect.height, rect.angle_deg)
        } else {
            (rect.height, rect.width, rect.angle_deg + 90.0)
        };
        Self {
            center: rect.center,
            length,
            width,
            angle_deg,
        }
    }

    /// Radius of the rounded slot ends.
    pub fn arc_radius(&self) -> f32 {
        0.5 * self.width
    }
}

/// Everything one inspection measures. Built from scratch on every call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResults {
    /// Minimum-area rectangle of the part's outer contour.
    pub bounding_box: RotatedRect,
    /// Round holes in contour discovery order.
    pub circles: Vec<CircleResult>,
    /// Last slot-shaped opening in scan order, `None` if there was none.
    pub slot: Option<SlotResult>,
    /// How many openings qualified as a slot. Values above 1 mean earlier
    /// candidates were superseded by `slot`.
    pub slot_candidates: usize,
}

impl fmt::Display for MeasurementResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bounding_box;
        writeln!(f, "===== Inspection Results =====")?;
        writeln!(f)?;
        writeln!(f, "[Outer Bounding Box]:")?;
        writeln!(f, "\t- Center: ({:.3}, {:.3})", b.center.x, b.center.y)?;
        writeln!(f, "\t- Size: {:.3} x {:.3}", b.width, b.height)?;
        writeln!(f, "\t- Angle: {:.3} deg", b.angle_deg)?;
        writeln!(f)?;

        writeln!(f, "[Small Circles Found]: {}", self.circles.len())?;
        for (i, c) in self.circles.iter().enumerate() {
            writeln!(f, "  - Circle {i}:")?;
            writeln!(f, "\t- Center: ({:.3}, {:.3})", c.center.x, c.center.y)?;
            writeln!(f, "\t- Radius: {:.3}", c.radius)?;
        }
        writeln!(f)?;

        match &self.slot {
            Some(s) => {
                writeln!(f, "[Slot Found]:")?;
                writeln!(f, "\t- Center: ({:.3}, {:.3})", s.center.x, s.center.y)?;
                writeln!(f, "\t- Length: {:.3}", s.length)?;
                writeln!(
                    f,
                    "\t- Width: {:.3} (Arc Radius: {:.3})",
                    s.width,
                    s.arc_radius()
                )?;
                writeln!(f, "\t- Angle: {:.3} deg", s.angle_deg)?;
                if self.slot_candidates > 1 {
                    writeln!(
                        f,
                        "\t- Note: {} slot candidates, last one reported",
                        self.slot_candidates
                    )?;
                }
            }
            None => writeln!(f, "[Slot Found]: none")?,
        }
        Ok(())
    }
}
