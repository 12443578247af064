use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::polygon::convex_hull;

/// Rectangle of arbitrary rotation in image coordinates (x right, y down).
///
/// `angle_deg` is the direction of the `width` side, normalized to
/// `[0, 90)`; `height` is the perpendicular side. An axis-aligned rectangle
/// therefore always has angle 0 and `width` equal to its horizontal extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotatedRect {
    pub center: Point2<f32>,
    pub width: f32,
    pub height: f32,
    pub angle_deg: f32,
}

impl Default for RotatedRect {
    fn default() -> Self {
        Self {
            center: Point2::origin(),
            width: 0.0,
            height: 0.0,
            angle_deg: 0.0,
        }
    }
}

impl RotatedRect {
    /// Build a rectangle from a side direction in any quadrant and bring it
    /// into the canonical `[0, 90)` form.
    pub fn new(center: Point2<f32>, width: f32, height: f32, angle_deg: f32) -> Self {
        let mut angle = angle_deg.rem_euclid(180.0);
        let (mut w, mut h) = (width, height);
        if angle >= 90.0 {
            angle -= 90.0;
            std::mem::swap(&mut w, &mut h);
        }
        Self {
            center,
            width: w,
            height: h,
            angle_deg: angle,
        }
    }

    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }

    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The four corners, consecutive corners sharing an edge.
    pub fn corners(&self) -> [Point2<f32>; 4] {
        let (sin_a, cos_a) = self.angle_deg.to_radians().sin_cos();
        let u = Vector2::new(cos_a, sin_a) * (0.5 * self.width);
        let v = Vector2::new(-sin_a, cos_a) * (0.5 * self.height);
        let c = self.center;
        [c - u - v, c + u - v, c + u + v, c - u + v]
    }
}

/// Minimum-area enclosing rectangle of a point set (rotating calipers on the
/// convex hull).
///
/// A single distinct point gives a zero-size rectangle, collinear points a
/// zero-height one along the segment. Returns `None` for an empty input.
/// Among hull edges with equal rectangle area the first one wins.
pub fn min_area_rect(points: &[Point2<f64>]) -> Option<RotatedRect> {
    let hull = convex_hull(points);
    match hull.len() {
        0 => None,
        1 => Some(RotatedRect::new(to_f32(hull[0]), 0.0, 0.0, 0.0)),
        2 => {
            let d = hull[1] - hull[0];
            let center = hull[0] + d * 0.5;
            let angle = d.y.atan2(d.x).to_degrees();
            Some(RotatedRect::new(
                to_f32(center),
                d.norm() as f32,
                0.0,
                angle as f32,
            ))
        }
        n => {
            let mut best: Option<(f64, RotatedRect)> = None;
            for i in 0..n {
                let origin = hull[i];
                let edge = hull[(i + 1) % n] - origin;
                let len = edge.norm();
                if len < f64::EPSILON {
                    continue;
                }
                let u = edge / len;
                let v = Vector2::new(-u.y, u.x);

                let (mut min_u, mut max_u) = (f64::MAX, f64::MIN);
                let (mut min_v, mut max_v) = (f64::MAX, f64::MIN);
                for p in &hull {
                    let r = *p - origin;
                    let pu = r.dot(&u);
                    let pv = r.dot(&v);
                    min_u = min_u.min(pu);
                    max_u = max_u.max(pu);
                    min_v = min_v.min(pv);
                    max_v = max_v.max(pv);
                }

                let width = max_u - min_u;
                let height = max_v - min_v;
                let area = width * height;
                if best.as_ref().is_some_and(|(a, _)| area >= *a) {
                    continue;
                }

                let center =
                    origin + u * (0.5 * (min_u + max_u)) + v * (0.5 * (min_v + max_v));
                let angle = u.y.atan2(u.x).to_degrees();
                let rect =
                    RotatedRect::new(to_f32(center), width as f32, height as f32, angle as f32);
                best = Some((area, rect));
            }
            best.map(|(_, rect)| rect)
        }
    }
}

#[inline]
fn to_f32(p: Point2<f64>) -> Point2<f32> {
    Point2::new(p.x as f32, p.y as f32)
}
